use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::order::{OrderItemModel, OrderModel},
    utils::TimeWindow,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::Row;
use std::time::Duration;
use tracing::error;

/// Upper bound on a single order query.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_paid_orders(
        &self,
        store_id: &str,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // LEFT JOIN so orders without items still show up with a zero total.
        let sql_all = r#"
            SELECT
                o.id AS order_id,
                o.store_id,
                o.is_paid,
                o.created_at,
                oi.product_id,
                p.price
            FROM
                orders o
            LEFT JOIN
                order_items oi ON oi.order_id = o.id
            LEFT JOIN
                products p ON p.id = oi.product_id
            WHERE
                o.store_id = $1
                AND o.is_paid = TRUE
            ORDER BY
                o.created_at, o.id;
        "#;

        let sql_windowed = r#"
            SELECT
                o.id AS order_id,
                o.store_id,
                o.is_paid,
                o.created_at,
                oi.product_id,
                p.price
            FROM
                orders o
            LEFT JOIN
                order_items oi ON oi.order_id = o.id
            LEFT JOIN
                products p ON p.id = oi.product_id
            WHERE
                o.store_id = $1
                AND o.is_paid = TRUE
                AND o.created_at >= $2
                AND o.created_at <= $3
            ORDER BY
                o.created_at, o.id;
        "#;

        let query = match window {
            Some(window) => sqlx::query(sql_windowed)
                .bind(store_id)
                .bind(window.start)
                .bind(window.end),
            None => sqlx::query(sql_all).bind(store_id),
        };

        let rows = tokio::time::timeout(QUERY_TIMEOUT, query.fetch_all(&mut *conn))
            .await
            .map_err(|_| {
                error!("❌ Timed out in find_paid_orders for store {store_id}");
                RepositoryError::Custom("order query timed out".to_string())
            })?
            .map_err(|e| {
                error!("❌ Database error in find_paid_orders: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let mut orders: Vec<OrderModel> = Vec::new();
        for row in rows {
            let order_id: String = row.try_get("order_id")?;
            let store_id: String = row.try_get("store_id")?;
            let is_paid: bool = row.try_get("is_paid")?;
            let created_at: NaiveDateTime = row.try_get("created_at")?;
            let product_id: Option<String> = row.try_get("product_id")?;
            let price: Option<Decimal> = row.try_get("price")?;

            if orders.last().map(|o| o.id.as_str()) != Some(order_id.as_str()) {
                orders.push(OrderModel {
                    id: order_id,
                    store_id,
                    is_paid,
                    created_at,
                    items: Vec::new(),
                });
            }

            if let (Some(product_id), Some(price)) = (product_id, price) {
                let order = orders.last_mut().unwrap();
                order.items.push(OrderItemModel { product_id, price });
            }
        }

        Ok(orders)
    }
}
