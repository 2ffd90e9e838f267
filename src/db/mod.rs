mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgProductStore;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};

/// Storage for the `products` table. Every method runs exactly one statement.
///
/// Update and delete report the number of affected rows and never treat zero
/// as an error.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_products(&self) -> AppResult<Vec<Product>>;
    async fn insert_product(&self, payload: &NewProduct) -> AppResult<Product>;
    async fn update_product(&self, id: &str, payload: &NewProduct) -> AppResult<u64>;
    async fn delete_product(&self, id: &str) -> AppResult<u64>;
}

/// Path ids arrive unvalidated. One that is not an integer matches no row.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}
