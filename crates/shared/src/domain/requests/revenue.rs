use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams, Clone)]
pub struct FindRevenue {
    #[serde(rename = "storeId")]
    #[validate(length(min = 1, message = "Store id must not be empty"))]
    pub store_id: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams, Clone)]
pub struct FindRevenueByDate {
    #[serde(rename = "storeId")]
    #[validate(length(min = 1, message = "Store id must not be empty"))]
    pub store_id: String,

    /// RFC 3339 timestamp or `YYYY-MM-DD` calendar date.
    pub date: String,
}
