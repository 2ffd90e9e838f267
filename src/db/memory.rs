//! In-process `ProductStore` doubles for handler tests.

use std::time::Duration;

use tokio::sync::RwLock;

use super::{parse_id, ProductStore};
use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product};

/// Rows kept in insertion order with a monotonically increasing id.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Product>,
    last_id: i32,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<Product> {
        self.inner.read().await.rows.clone()
    }
}

#[async_trait::async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.snapshot().await)
    }

    async fn insert_product(&self, payload: &NewProduct) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let product = payload.with_id(inner.last_id);
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &str, payload: &NewProduct) -> AppResult<u64> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };
        let mut inner = self.inner.write().await;
        match inner.rows.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                *row = payload.with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_product(&self, id: &str) -> AppResult<u64> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };
        let mut inner = self.inner.write().await;
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}

/// Fails every call the way a dropped connection would.
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[async_trait::async_trait]
impl ProductStore for UnavailableStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_product(&self, _payload: &NewProduct) -> AppResult<Product> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_product(&self, _id: &str, _payload: &NewProduct) -> AppResult<u64> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_product(&self, _id: &str) -> AppResult<u64> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Wraps `MemoryProductStore` and stalls every call for `delay`, like a hung
/// connection.
#[derive(Debug)]
pub struct SlowStore {
    inner: MemoryProductStore,
    delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryProductStore::new(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for SlowStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_products().await
    }

    async fn insert_product(&self, payload: &NewProduct) -> AppResult<Product> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert_product(payload).await
    }

    async fn update_product(&self, id: &str, payload: &NewProduct) -> AppResult<u64> {
        tokio::time::sleep(self.delay).await;
        self.inner.update_product(id, payload).await
    }

    async fn delete_product(&self, id: &str) -> AppResult<u64> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete_product(id).await
    }
}
