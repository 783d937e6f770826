use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

pub type DynCacheStore = Arc<dyn CacheStoreTrait + Send + Sync>;

/// String-keyed cache with string-serialized values. Implementations are
/// fail-open: a broken cache reads as a miss and writes as a no-op, never as
/// an error surfaced to the caller.
#[async_trait]
pub trait CacheStoreTrait {
    async fn get_string(&self, key: &str) -> Option<String>;
    async fn set_string(&self, key: &str, value: &str, ttl: Duration);
}
