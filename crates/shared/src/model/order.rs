use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item of an order. An item references a product and contributes
/// exactly one unit of that product's price to the order total; there is no
/// quantity multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemModel {
    pub product_id: String,
    pub price: Decimal,
}

/// A paid order with its line items, as returned by the order query
/// repository. Items are owned by the order and carry the product price
/// joined in at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: String,
    pub store_id: String,
    pub is_paid: bool,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItemModel>,
}
