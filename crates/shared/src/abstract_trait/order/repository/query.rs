use crate::{errors::RepositoryError, model::order::OrderModel, utils::TimeWindow};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Paid orders of a store, each with its line items and their product
    /// prices. When a window is given, only orders created within
    /// `[start, end]` (inclusive on both ends) are returned.
    async fn find_paid_orders(
        &self,
        store_id: &str,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<OrderModel>, RepositoryError>;
}
