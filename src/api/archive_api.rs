use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::error::TemperatureError;
use crate::types::temperature::OrderDateRange;

/// Fixed observation point for the temperature series.
pub const LATITUDE: f64 = 50.6053;
pub const LONGITUDE: f64 = -3.5952;

/// Client for the historical weather archive. One GET per call: no retry, no cache.
#[derive(Clone)]
pub struct ArchiveApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ArchiveApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Daily maximum 2 m temperature (GMT) for every day in `range`, returned verbatim.
    pub async fn fetch_daily_max(&self, range: &OrderDateRange) -> Result<Value, TemperatureError> {
        let start_date = range.start_param();
        let end_date = range.end_param();
        debug!(%start_date, %end_date, url = %self.base_url, "requesting temperature archive");

        let resp = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("latitude", LATITUDE.to_string()),
                ("longitude", LONGITUDE.to_string()),
                ("start_date", start_date),
                ("end_date", end_date),
                ("daily", "temperature_2m_max".to_string()),
                ("timezone", "GMT".to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            error!(%status, "temperature archive returned non-success status");
            return Err(TemperatureError::UpstreamStatus(status));
        }

        let body = resp.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        info!(bytes = body.len(), "temperature archive response received");
        Ok(value)
    }
}
