use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single revenue total. The amount stays a decimal end-to-end and is
/// serialized as a string to keep cent-level precision on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RevenueResponse {
    #[serde(rename = "storeId")]
    pub store_id: String,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: Decimal,
}
