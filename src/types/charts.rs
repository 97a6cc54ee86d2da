//! Column-oriented payloads for the dashboard charts.
//!
//! Each query returns rows; the browser wants one array per column. Arrays in
//! a payload are always the same length and aligned by index.

use serde::Serialize;

use crate::db::models::{DailyOrderCount, PaymentMethodCount, ProductTotal, StockLevel};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersOverTime {
    pub dates: Vec<String>,
    pub counts: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LowStockLevels {
    pub products: Vec<Option<String>>,
    pub quantities: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MostPopularProducts {
    pub product_ids: Vec<i64>,
    pub product_names: Vec<Option<String>>,
    pub totals: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentMethodPopularity {
    pub methods: Vec<String>,
    pub counts: Vec<i64>,
}

impl FromIterator<DailyOrderCount> for OrdersOverTime {
    fn from_iter<I: IntoIterator<Item = DailyOrderCount>>(rows: I) -> Self {
        let (dates, counts) = rows
            .into_iter()
            .map(|row| (row.order_date, row.num_orders))
            .unzip();
        Self { dates, counts }
    }
}

impl FromIterator<StockLevel> for LowStockLevels {
    fn from_iter<I: IntoIterator<Item = StockLevel>>(rows: I) -> Self {
        let (products, quantities) = rows
            .into_iter()
            .map(|row| (row.product_name, row.quantity))
            .unzip();
        Self {
            products,
            quantities,
        }
    }
}

impl FromIterator<ProductTotal> for MostPopularProducts {
    fn from_iter<I: IntoIterator<Item = ProductTotal>>(rows: I) -> Self {
        let mut out = Self::default();
        for row in rows {
            out.product_ids.push(row.product_id);
            out.product_names.push(row.product_name);
            out.totals.push(row.total_quantity);
        }
        out
    }
}

impl FromIterator<PaymentMethodCount> for PaymentMethodPopularity {
    fn from_iter<I: IntoIterator<Item = PaymentMethodCount>>(rows: I) -> Self {
        let (methods, counts) = rows
            .into_iter()
            .map(|row| (row.method_name, row.transaction_count))
            .unzip();
        Self { methods, counts }
    }
}
