use axum::response::Html;

use crate::error::DashboardError;

const DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

/// GET / -> the Chart.js dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Fallback for every unmatched path.
pub async fn not_found() -> DashboardError {
    DashboardError::NotFound
}
