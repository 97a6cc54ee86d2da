use axum::{Router, routing::get};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::ArchiveApi;
use crate::config::Config;
use crate::db::OrdersStore;
use crate::error::panic_response;
use crate::handlers::charts::{
    ChartQuery, LowStockLevelsChart, MostPopularProductsChart, OrdersOverTimeChart,
    PaymentMethodPopularityChart, TemperatureOverTimeChart, chart_handler,
};
use crate::handlers::dashboard::{index, not_found};

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub store: OrdersStore,
    pub archive: ArchiveApi,
}

impl DashboardState {
    pub fn new(store: OrdersStore, archive: ArchiveApi) -> Self {
        Self { store, archive }
    }

    /// Wire up the store and archive client described by `cfg`.
    pub fn from_config(cfg: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ccl-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(
            OrdersStore::open(&cfg.database_path),
            ArchiveApi::new(client, cfg.archive_url.clone()),
        ))
    }
}

pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(
            OrdersOverTimeChart::ROUTE,
            get(chart_handler::<OrdersOverTimeChart>),
        )
        .route(
            LowStockLevelsChart::ROUTE,
            get(chart_handler::<LowStockLevelsChart>),
        )
        .route(
            MostPopularProductsChart::ROUTE,
            get(chart_handler::<MostPopularProductsChart>),
        )
        .route(
            PaymentMethodPopularityChart::ROUTE,
            get(chart_handler::<PaymentMethodPopularityChart>),
        )
        .route(
            TemperatureOverTimeChart::ROUTE,
            get(chart_handler::<TemperatureOverTimeChart>),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
