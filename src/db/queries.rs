//! Fixed read-only statements backing the chart endpoints.
//! Every statement targets the externally-owned e-commerce schema.

/// Order count per calendar day, oldest first.
pub const ORDERS_OVER_TIME: &str = r#"
SELECT order_date, COUNT(order_id) AS num_orders
FROM orders
GROUP BY order_date
ORDER BY order_date
"#;

/// Every stocked product, lowest quantity first.
pub const LOW_STOCK_LEVELS: &str = r#"
SELECT p.product_name, s.quantity
FROM stock_level s
JOIN products p ON s.product_id = p.product_id
ORDER BY s.quantity ASC
"#;

/// Top ten products by units ordered. Equal totals fall back to `product_id` ascending.
pub const MOST_POPULAR_PRODUCTS: &str = r#"
SELECT p.product_id, p.product_name, SUM(od.quantity_ordered) AS total_quantity
FROM order_details od
JOIN products p ON od.product_id = p.product_id
GROUP BY p.product_id, p.product_name
ORDER BY total_quantity DESC, p.product_id ASC
LIMIT 10
"#;

/// Transactions per payment method, most used first.
pub const PAYMENT_METHOD_POPULARITY: &str = r#"
SELECT pm.method_name, COUNT(p.payment_id) AS transaction_count
FROM payments p
JOIN payment_methods pm ON p.method_id = pm.method_id
GROUP BY pm.method_name
ORDER BY transaction_count DESC, pm.method_name ASC
"#;

/// First and last order dates. Both NULL when `orders` is empty.
pub const ORDER_DATE_BOUNDS: &str = r#"
SELECT MIN(order_date) AS first_order_date, MAX(order_date) AS last_order_date
FROM orders
"#;
