//! Database module: read-only access to the e-commerce store.
//!
//! Layout:
//! - `models.rs`: row structs decoded from the fixed queries
//! - `queries.rs`: the SQL text each endpoint runs (SQLite dialect)
//! - `sqlite.rs`: the query executor over a lazily-connecting pool

pub mod models;
pub mod queries;
pub mod sqlite;

pub use models::{DailyOrderCount, OrderDateBounds, PaymentMethodCount, ProductTotal, StockLevel};
pub use sqlite::{OrdersStore, SqlitePool};
