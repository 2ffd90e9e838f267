use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::debug;

use super::{parse_id, ProductStore};
use crate::error::AppResult;
use crate::models::{NewProduct, Product};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool and pings the server so a bad `DATABASE_URL` fails at
    /// startup instead of on the first request.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("Failed to ping the database")?;

        Ok(Self::new(pool))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl ProductStore for PgProductStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        // price may be NUMERIC in the table; read it as float8.
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::float8 AS price, quantity FROM products",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn insert_product(&self, payload: &NewProduct) -> AppResult<Product> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price, quantity) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(payload.with_id(id))
    }

    async fn update_product(&self, id: &str, payload: &NewProduct) -> AppResult<u64> {
        let Some(id) = parse_id(id) else {
            debug!(id, "Non-integer id, nothing to update");
            return Ok(0);
        };

        let result = sqlx::query(
            "UPDATE products SET name = $1, price = $2, quantity = $3 WHERE id = $4",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.quantity)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_product(&self, id: &str) -> AppResult<u64> {
        let Some(id) = parse_id(id) else {
            debug!(id, "Non-integer id, nothing to delete");
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
