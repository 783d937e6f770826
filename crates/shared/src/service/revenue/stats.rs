use crate::{
    abstract_trait::{
        cache::DynCacheStore, order::repository::DynOrderQueryRepository,
        revenue::service::RevenueStatsServiceTrait,
    },
    domain::responses::{ApiResponse, RevenueResponse},
    errors::ServiceError,
    model::order::OrderModel,
    utils::{TimeWindow, current_month, day_window, parse_date_input, previous_month},
};
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

pub struct RevenueStatsService {
    pub query: DynOrderQueryRepository,
    pub cache_store: DynCacheStore,
}

impl RevenueStatsService {
    pub fn new(query: DynOrderQueryRepository, cache_store: DynCacheStore) -> Self {
        Self { query, cache_store }
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    /// New paid orders become visible once the entry expires.
    fn cache_ttl() -> Duration {
        Duration::minutes(10)
    }

    fn total_cache_key(store_id: &str) -> String {
        format!("revenue:total:store:{store_id}")
    }

    fn month_cache_key(metric: &str, store_id: &str, window: &TimeWindow) -> String {
        format!(
            "revenue:{metric}:store:{store_id}:{:04}-{:02}",
            window.start.year(),
            window.start.month()
        )
    }

    fn ensure_store_id(store_id: &str) -> Result<(), ServiceError> {
        if store_id.trim().is_empty() {
            let msg = "Store id must not be empty".to_string();
            error!("Validation failed: {msg}");
            return Err(ServiceError::Validation(vec![msg]));
        }
        Ok(())
    }

    /// Each line item contributes one unit of its product price; an order's
    /// total is the sum of its items and the store total the sum over orders.
    fn sum_orders(orders: &[OrderModel]) -> Decimal {
        orders
            .iter()
            .map(|order| order.items.iter().map(|item| item.price).sum::<Decimal>())
            .sum()
    }

    async fn aggregate(
        &self,
        store_id: &str,
        window: Option<&TimeWindow>,
    ) -> Result<Decimal, ServiceError> {
        let orders = self
            .query
            .find_paid_orders(store_id, window)
            .await
            .map_err(|e| {
                error!("❌ Failed to query paid orders for store {store_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        Ok(Self::sum_orders(&orders))
    }

    async fn cached_total(&self, key: &str) -> Option<Decimal> {
        let raw = self.cache_store.get_string(key).await?;
        match serde_json::from_str::<Decimal>(&raw) {
            Ok(total) => Some(total),
            Err(e) => {
                warn!("⚠️ Discarding undecodable cache entry {key}: {e:?}");
                None
            }
        }
    }

    async fn store_total(&self, key: &str, total: Decimal) {
        match serde_json::to_string(&total) {
            Ok(raw) => {
                self.cache_store
                    .set_string(key, &raw, Self::cache_ttl())
                    .await;
            }
            Err(e) => warn!("⚠️ Failed to serialize total for cache entry {key}: {e:?}"),
        }
    }

    fn revenue_response(store_id: &str, total: Decimal) -> RevenueResponse {
        RevenueResponse {
            store_id: store_id.to_string(),
            total_revenue: total,
        }
    }
}

#[async_trait]
impl RevenueStatsServiceTrait for RevenueStatsService {
    async fn total_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError> {
        Self::ensure_store_id(store_id)?;

        info!("💰 Fetching total revenue for store: {store_id}");

        let cache_key = Self::total_cache_key(store_id);

        if let Some(total) = self.cached_total(&cache_key).await {
            info!("✅ Found total revenue in cache for store: {store_id}");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Total revenue retrieved from cache".to_string(),
                data: Self::revenue_response(store_id, total),
            });
        }

        let total = self.aggregate(store_id, None).await?;

        self.store_total(&cache_key, total).await;

        info!("✅ Total revenue for store {store_id}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Total revenue retrieved successfully".to_string(),
            data: Self::revenue_response(store_id, total),
        })
    }

    async fn revenue_on_date(
        &self,
        store_id: &str,
        date: &str,
    ) -> Result<ApiResponse<Option<RevenueResponse>>, ServiceError> {
        Self::ensure_store_id(store_id)?;

        info!("📅 Fetching revenue for store {store_id} on date: {date}");

        // Unparsable dates yield an empty result, never an error.
        let Some(instant) = parse_date_input(date) else {
            warn!("⚠️ Invalid date '{date}' supplied for store {store_id}");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: format!("No revenue window for invalid date '{date}'"),
                data: None,
            });
        };

        let window = day_window(instant);

        // This operation is computed fresh on every call.
        let total = self.aggregate(store_id, Some(&window)).await?;

        info!("✅ Revenue for store {store_id} on {date}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: format!("Revenue for {date} retrieved successfully"),
            data: Some(Self::revenue_response(store_id, total)),
        })
    }

    async fn current_month_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError> {
        Self::ensure_store_id(store_id)?;

        info!("📊 Fetching current month revenue for store: {store_id}");

        let window = current_month(Self::now());
        let cache_key = Self::month_cache_key("current_month", store_id, &window);

        if let Some(total) = self.cached_total(&cache_key).await {
            info!("✅ Found current month revenue in cache for store: {store_id}");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Current month revenue retrieved from cache".to_string(),
                data: Self::revenue_response(store_id, total),
            });
        }

        let total = self.aggregate(store_id, Some(&window)).await?;

        self.store_total(&cache_key, total).await;

        info!("✅ Current month revenue for store {store_id}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Current month revenue retrieved successfully".to_string(),
            data: Self::revenue_response(store_id, total),
        })
    }

    async fn previous_month_revenue(
        &self,
        store_id: &str,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError> {
        Self::ensure_store_id(store_id)?;

        info!("📊 Fetching previous month revenue for store: {store_id}");

        let window = previous_month(Self::now());
        let cache_key = Self::month_cache_key("previous_month", store_id, &window);

        if let Some(total) = self.cached_total(&cache_key).await {
            info!("✅ Found previous month revenue in cache for store: {store_id}");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Previous month revenue retrieved from cache".to_string(),
                data: Self::revenue_response(store_id, total),
            });
        }

        let total = self.aggregate(store_id, Some(&window)).await?;

        self.store_total(&cache_key, total).await;

        info!("✅ Previous month revenue for store {store_id}: {total}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Previous month revenue retrieved successfully".to_string(),
            data: Self::revenue_response(store_id, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{cache::CacheStoreTrait, order::repository::OrderQueryRepositoryTrait};
    use crate::errors::RepositoryError;
    use crate::model::order::OrderItemModel;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct MockOrderRepository {
        orders: Vec<OrderModel>,
        calls: AtomicUsize,
    }

    impl MockOrderRepository {
        fn new(orders: Vec<OrderModel>) -> Self {
            Self {
                orders,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for MockOrderRepository {
        async fn find_paid_orders(
            &self,
            store_id: &str,
            window: Option<&TimeWindow>,
        ) -> Result<Vec<OrderModel>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            Ok(self
                .orders
                .iter()
                .filter(|order| order.store_id == store_id)
                .filter(|order| order.is_paid)
                .filter(|order| window.is_none_or(|w| w.contains(order.created_at)))
                .cloned()
                .collect())
        }
    }

    struct MockCacheStore {
        entries: Mutex<HashMap<String, String>>,
        unreachable: bool,
        writes: AtomicUsize,
    }

    impl MockCacheStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                unreachable: false,
                writes: AtomicUsize::new(0),
            }
        }

        fn down() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                unreachable: true,
                writes: AtomicUsize::new(0),
            }
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CacheStoreTrait for MockCacheStore {
        async fn get_string(&self, key: &str) -> Option<String> {
            if self.unreachable {
                return None;
            }
            self.entries.lock().unwrap().get(key).cloned()
        }

        async fn set_string(&self, key: &str, value: &str, _ttl: Duration) {
            if self.unreachable {
                return;
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn order(id: &str, store_id: &str, is_paid: bool, created_at: NaiveDateTime, prices: &[&str]) -> OrderModel {
        OrderModel {
            id: id.to_string(),
            store_id: store_id.to_string(),
            is_paid,
            created_at,
            items: prices
                .iter()
                .enumerate()
                .map(|(i, price)| OrderItemModel {
                    product_id: format!("{id}-product-{i}"),
                    price: price.parse().unwrap(),
                })
                .collect(),
        }
    }

    fn store_fixture() -> Vec<OrderModel> {
        vec![
            order("order-a", "store-1", true, at(2024, 3, 15, 8, 0, 0), &["10.00", "5.50"]),
            order("order-b", "store-1", true, at(2024, 4, 1, 0, 0, 1), &["3.25"]),
            order("order-c", "store-1", false, at(2024, 3, 15, 9, 0, 0), &["100.00"]),
        ]
    }

    fn service(
        orders: Vec<OrderModel>,
        cache: MockCacheStore,
    ) -> (RevenueStatsService, Arc<MockOrderRepository>, Arc<MockCacheStore>) {
        let repo = Arc::new(MockOrderRepository::new(orders));
        let cache = Arc::new(cache);
        let service = RevenueStatsService::new(repo.clone(), cache.clone());
        (service, repo, cache)
    }

    #[tokio::test]
    async fn total_revenue_sums_items_across_paid_orders_only() {
        let (service, repo, _) = service(store_fixture(), MockCacheStore::new());

        let response = service.total_revenue("store-1").await.unwrap();

        assert_eq!(response.data.total_revenue, "18.75".parse().unwrap());
        assert_eq!(repo.call_count(), 1);
    }

    #[tokio::test]
    async fn total_revenue_is_zero_when_no_orders_match() {
        let (service, _, _) = service(store_fixture(), MockCacheStore::new());

        let response = service.total_revenue("store-2").await.unwrap();

        assert_eq!(response.data.total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn total_revenue_serves_repeat_calls_from_cache() {
        let (service, repo, cache) = service(store_fixture(), MockCacheStore::new());

        let first = service.total_revenue("store-1").await.unwrap();
        let second = service.total_revenue("store-1").await.unwrap();

        assert_eq!(first.data.total_revenue, second.data.total_revenue);
        assert_eq!(repo.call_count(), 1);
        assert_eq!(cache.write_count(), 1);
    }

    #[tokio::test]
    async fn total_revenue_recomputes_when_cache_is_down() {
        let (service, repo, _) = service(store_fixture(), MockCacheStore::down());

        let first = service.total_revenue("store-1").await.unwrap();
        let second = service.total_revenue("store-1").await.unwrap();

        assert_eq!(first.data.total_revenue, "18.75".parse().unwrap());
        assert_eq!(second.data.total_revenue, "18.75".parse().unwrap());
        assert_eq!(repo.call_count(), 2);
    }

    #[tokio::test]
    async fn revenue_on_date_filters_to_the_calendar_day() {
        let (service, _, _) = service(store_fixture(), MockCacheStore::new());

        let march = service.revenue_on_date("store-1", "2024-03-15").await.unwrap();
        let april = service.revenue_on_date("store-1", "2024-04-01").await.unwrap();

        assert_eq!(march.data.unwrap().total_revenue, "15.50".parse().unwrap());
        assert_eq!(april.data.unwrap().total_revenue, "3.25".parse().unwrap());
    }

    #[tokio::test]
    async fn revenue_on_date_keeps_supplied_time_of_day_as_window_start() {
        let (service, _, _) = service(store_fixture(), MockCacheStore::new());

        // Window starts at 09:00, so the 08:00 order falls outside it.
        let response = service
            .revenue_on_date("store-1", "2024-03-15T09:00:00Z")
            .await
            .unwrap();

        assert_eq!(response.data.unwrap().total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn revenue_on_date_is_computed_fresh_on_every_call() {
        let (service, repo, cache) = service(store_fixture(), MockCacheStore::new());

        service.revenue_on_date("store-1", "2024-03-15").await.unwrap();
        service.revenue_on_date("store-1", "2024-03-15").await.unwrap();

        assert_eq!(repo.call_count(), 2);
        assert_eq!(cache.write_count(), 0);
    }

    #[tokio::test]
    async fn revenue_on_date_returns_empty_result_for_invalid_date() {
        let (service, repo, _) = service(store_fixture(), MockCacheStore::new());

        let response = service
            .revenue_on_date("store-1", "not-a-date")
            .await
            .unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.status, "success");
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn month_revenue_serves_repeat_calls_from_cache() {
        let now = Utc::now().naive_utc();
        let orders = vec![
            order("order-now", "store-1", true, now, &["7.25"]),
            order("order-unpaid", "store-1", false, now, &["99.00"]),
        ];
        let (service, repo, _) = service(orders, MockCacheStore::new());

        let first = service.current_month_revenue("store-1").await.unwrap();
        let second = service.current_month_revenue("store-1").await.unwrap();

        assert_eq!(first.data.total_revenue, "7.25".parse().unwrap());
        assert_eq!(second.data.total_revenue, "7.25".parse().unwrap());
        assert_eq!(repo.call_count(), 1);
    }

    #[tokio::test]
    async fn month_metrics_use_distinct_cache_entries() {
        let (service, repo, cache) = service(store_fixture(), MockCacheStore::new());

        service.current_month_revenue("store-1").await.unwrap();
        service.previous_month_revenue("store-1").await.unwrap();

        assert_eq!(repo.call_count(), 2);
        assert_eq!(cache.write_count(), 2);
    }

    #[tokio::test]
    async fn cache_entries_are_scoped_per_store() {
        let now = Utc::now().naive_utc();
        let orders = vec![
            order("order-s1", "store-1", true, now, &["10.00"]),
            order("order-s2", "store-2", true, now, &["4.00"]),
        ];
        let (service, _, _) = service(orders, MockCacheStore::new());

        let first = service.current_month_revenue("store-1").await.unwrap();
        let second = service.current_month_revenue("store-2").await.unwrap();

        assert_eq!(first.data.total_revenue, "10.00".parse().unwrap());
        assert_eq!(second.data.total_revenue, "4.00".parse().unwrap());
    }

    #[tokio::test]
    async fn blank_store_id_is_rejected_before_querying() {
        let (service, repo, _) = service(store_fixture(), MockCacheStore::new());

        let result = service.total_revenue("  ").await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn orders_without_items_contribute_zero() {
        let orders = vec![order("order-empty", "store-1", true, at(2024, 3, 15, 8, 0, 0), &[])];
        let (service, _, _) = service(orders, MockCacheStore::new());

        let response = service.total_revenue("store-1").await.unwrap();

        assert_eq!(response.data.total_revenue, Decimal::ZERO);
    }
}
