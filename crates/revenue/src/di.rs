use shared::{
    abstract_trait::{
        cache::DynCacheStore, order::repository::DynOrderQueryRepository,
        revenue::service::DynRevenueStatsService,
    },
    cache::CacheStore,
    config::{ConnectionPool, RedisPool},
    repository::order::OrderQueryRepository,
    service::revenue::RevenueStatsService,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub revenue_stats: DynRevenueStatsService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("revenue_stats", &"DynRevenueStatsService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, redis: RedisPool) -> Self {
        let cache = Arc::new(CacheStore::new(redis.pool.clone())) as DynCacheStore;

        let order_query_repo =
            Arc::new(OrderQueryRepository::new(db.clone())) as DynOrderQueryRepository;

        let revenue_stats = Arc::new(RevenueStatsService::new(order_query_repo, cache))
            as DynRevenueStatsService;

        Self { revenue_stats }
    }
}
