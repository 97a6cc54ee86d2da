use chrono::{NaiveDate, NaiveDateTime};

use crate::db::models::OrderDateBounds;
use crate::error::TemperatureError;

/// Inclusive span of days covered by the order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl OrderDateRange {
    /// `YYYY-MM-DD`, as the archive API expects.
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl TryFrom<OrderDateBounds> for OrderDateRange {
    type Error = TemperatureError;

    fn try_from(bounds: OrderDateBounds) -> Result<Self, Self::Error> {
        let (Some(first), Some(last)) = (bounds.first_order_date, bounds.last_order_date) else {
            return Err(TemperatureError::EmptyOrderRange);
        };
        Ok(Self {
            start: parse_order_date(&first)?,
            end: parse_order_date(&last)?,
        })
    }
}

/// Accepts a bare date or a timestamp; the time of day is dropped.
fn parse_order_date(raw: &str) -> Result<NaiveDate, TemperatureError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| TemperatureError::InvalidOrderDate(raw.to_string()))
}
