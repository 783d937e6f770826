use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::{Config, ConnectionPool, RedisPool};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: Arc<DependenciesInject>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let redis = RedisPool::new(&config.redis).context("Failed to connect to Redis")?;

        redis.ping().await.context("Failed to ping Redis server")?;

        let di_container = DependenciesInject::new(pool, redis);

        Ok(Self {
            di_container: Arc::new(di_container),
        })
    }
}
