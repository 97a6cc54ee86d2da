use mimalloc::MiMalloc;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ccl_dashboard::{Config, DashboardState, dashboard_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.log_file)?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_level(true)
                .with_target(true)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    info!(
        database_path = %cfg.database_path.display(),
        log_file = %cfg.log_file.display(),
        archive_url = %cfg.archive_url,
        loglevel = %cfg.loglevel,
    );
    if !cfg.database_path.exists() {
        warn!(
            path = %cfg.database_path.display(),
            "database file not found; API routes will fail until it exists"
        );
    }

    let state = DashboardState::from_config(&cfg)?;
    let app = dashboard_router(state);

    let listener = TcpListener::bind(cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
