mod di;
mod handler;
mod state;

use crate::handler::AppRouter;
use crate::state::AppState;
use anyhow::{Context, Result};
use shared::config::{Config, ConnectionManager};
use shared::utils::Logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("APP_ENV")
        .map(|env| env != "production")
        .unwrap_or(true);
    let _logger = Logger::new("revenue", is_dev);

    let config = Config::init().context("failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("failed to create postgres pool")?;

    if config.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
    }

    let app_state = AppState::new(pool, &config).await?;

    AppRouter::serve(config.port, app_state).await
}
