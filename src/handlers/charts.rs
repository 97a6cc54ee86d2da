use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::db::models::{
    DailyOrderCount, OrderDateBounds, PaymentMethodCount, ProductTotal, StockLevel,
};
use crate::db::queries;
use crate::error::DashboardError;
use crate::router::DashboardState;
use crate::types::charts::{
    LowStockLevels, MostPopularProducts, OrdersOverTime, PaymentMethodPopularity,
};
use crate::types::temperature::OrderDateRange;

/// One read-only chart endpoint: run its query and shape the result for the browser.
pub trait ChartQuery {
    /// Path the endpoint is mounted at; also used to tag failures in the log.
    const ROUTE: &'static str;
    type Output: Serialize + Send;

    fn run(
        state: &DashboardState,
    ) -> impl Future<Output = Result<Self::Output, DashboardError>> + Send;
}

/// Shared axum handler for every [`ChartQuery`]. Failures are logged with the
/// route here and rendered by `DashboardError`'s `IntoResponse`.
pub async fn chart_handler<Q: ChartQuery>(
    State(state): State<DashboardState>,
) -> Result<Json<Q::Output>, DashboardError> {
    Q::run(&state)
        .await
        .map(Json)
        .inspect_err(|e| error!(route = Q::ROUTE, error = %e, "request failed"))
}

pub struct OrdersOverTimeChart;

impl ChartQuery for OrdersOverTimeChart {
    const ROUTE: &'static str = "/api/orders_over_time";
    type Output = OrdersOverTime;

    async fn run(state: &DashboardState) -> Result<Self::Output, DashboardError> {
        let rows: Vec<DailyOrderCount> = state.store.fetch_rows(queries::ORDERS_OVER_TIME).await?;
        Ok(rows.into_iter().collect())
    }
}

pub struct LowStockLevelsChart;

impl ChartQuery for LowStockLevelsChart {
    const ROUTE: &'static str = "/api/low_stock_levels";
    type Output = LowStockLevels;

    async fn run(state: &DashboardState) -> Result<Self::Output, DashboardError> {
        let rows: Vec<StockLevel> = state.store.fetch_rows(queries::LOW_STOCK_LEVELS).await?;
        Ok(rows.into_iter().collect())
    }
}

pub struct MostPopularProductsChart;

impl ChartQuery for MostPopularProductsChart {
    const ROUTE: &'static str = "/api/most_popular_products";
    type Output = MostPopularProducts;

    async fn run(state: &DashboardState) -> Result<Self::Output, DashboardError> {
        let rows: Vec<ProductTotal> = state
            .store
            .fetch_rows(queries::MOST_POPULAR_PRODUCTS)
            .await?;
        Ok(rows.into_iter().collect())
    }
}

pub struct PaymentMethodPopularityChart;

impl ChartQuery for PaymentMethodPopularityChart {
    const ROUTE: &'static str = "/api/payment_method_popularity";
    type Output = PaymentMethodPopularity;

    async fn run(state: &DashboardState) -> Result<Self::Output, DashboardError> {
        let rows: Vec<PaymentMethodCount> = state
            .store
            .fetch_rows(queries::PAYMENT_METHOD_POPULARITY)
            .await?;
        Ok(rows.into_iter().collect())
    }
}

/// Temperature series covering the order history, relayed from the archive as-is.
pub struct TemperatureOverTimeChart;

impl ChartQuery for TemperatureOverTimeChart {
    const ROUTE: &'static str = "/api/temperature_over_time";
    type Output = Value;

    async fn run(state: &DashboardState) -> Result<Self::Output, DashboardError> {
        let bounds: OrderDateBounds = state
            .store
            .fetch_one_row(queries::ORDER_DATE_BOUNDS)
            .await?;
        let range = OrderDateRange::try_from(bounds)?;
        Ok(state.archive.fetch_daily_max(&range).await?)
    }
}
