use crate::abstract_trait::cache::CacheStoreTrait;
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{Pool, redis::cmd};
use std::time::Duration as StdDuration;
use tracing::warn;

/// Upper bound on a single cache round-trip. A slow cache is treated the
/// same as an unreachable one: miss on read, no-op on write.
const ROUND_TRIP_TIMEOUT: StdDuration = StdDuration::from_secs(2);

/// Redis-backed cache store. Every failure path degrades instead of
/// propagating: callers fall through to the underlying computation.
pub struct CacheStore {
    pool: Pool,
}

impl CacheStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn try_get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.pool.get().await?;
        let value = cmd("GET")
            .arg(key)
            .query_async::<Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }

    async fn try_set(&self, key: &str, value: &str, ttl: Duration) -> anyhow::Result<()> {
        let mut conn = self.pool.get().await?;
        cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl.num_seconds().max(1))
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStoreTrait for CacheStore {
    async fn get_string(&self, key: &str) -> Option<String> {
        match tokio::time::timeout(ROUND_TRIP_TIMEOUT, self.try_get(key)).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                warn!("⚠️ Cache read failed for key {key}: {e:?}");
                None
            }
            Err(_) => {
                warn!("⚠️ Cache read timed out for key {key}");
                None
            }
        }
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Duration) {
        match tokio::time::timeout(ROUND_TRIP_TIMEOUT, self.try_set(key, value, ttl)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("⚠️ Cache write failed for key {key}: {e:?}"),
            Err(_) => warn!("⚠️ Cache write timed out for key {key}"),
        }
    }
}
