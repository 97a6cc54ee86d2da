use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DailyOrderCount {
    pub order_date: String,
    pub num_orders: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StockLevel {
    /// `None` when the catalog row has no name; rendered as JSON `null`.
    pub product_name: Option<String>,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductTotal {
    pub product_id: i64,
    pub product_name: Option<String>,
    pub total_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PaymentMethodCount {
    pub method_name: String,
    pub transaction_count: i64,
}

/// `MIN`/`MAX` over `orders.order_date`; `None` on an empty table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderDateBounds {
    pub first_order_date: Option<String>,
    pub last_order_date: Option<String>,
}
