use crate::{
    domain::responses::{ApiResponse, RevenueResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRevenueStatsService = Arc<dyn RevenueStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait RevenueStatsServiceTrait {
    /// All-time revenue from paid orders of the store.
    async fn total_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError>;

    /// Revenue for one calendar date. An unparsable date yields an empty
    /// result (`data: None`), not an error.
    async fn revenue_on_date(
        &self,
        store_id: &str,
        date: &str,
    ) -> Result<ApiResponse<Option<RevenueResponse>>, ServiceError>;

    /// Revenue for the calendar month the wall clock is currently in.
    async fn current_month_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError>;

    /// Revenue for the calendar month before the current one.
    async fn previous_month_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError>;
}
