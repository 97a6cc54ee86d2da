use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::any::Any;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Temperature archive error: {0}")]
    Temperature(#[from] TemperatureError),

    #[error("Route not found")]
    NotFound,
}

/// Failures while resolving `/api/temperature_over_time` against the weather archive.
#[derive(Debug, ThisError)]
pub enum TemperatureError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("orders table is empty; no date range to query")]
    EmptyOrderRange,

    #[error("unrecognised order date: {0:?}")]
    InvalidOrderDate(String),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::NotFound => StatusCode::NOT_FOUND,
            DashboardError::Database(_) | DashboardError::Temperature(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Never carries the underlying error detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            DashboardError::NotFound => "Not found",
            DashboardError::Database(_) => "Internal server error",
            DashboardError::Temperature(_) => "Error fetching temperature data.",
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> axum::response::Response {
        let body = ApiErrorResponse {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Standardized API error response body: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: &'static str,
}

/// Response for a handler that panicked instead of returning an error.
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse {
            error: "Internal server error",
        }),
    )
        .into_response()
}
