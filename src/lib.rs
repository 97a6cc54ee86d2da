pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use config::Config;
pub use error::{DashboardError, TemperatureError};
pub use router::{DashboardState, dashboard_router};
