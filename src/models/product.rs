use serde::{Deserialize, Serialize};

/// One row of the `products` table. `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// Body accepted by create and update. `id` is optional and never written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl NewProduct {
    /// The product as it would read back with the given identity.
    pub fn with_id(&self, id: i32) -> Product {
        Product {
            id,
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}
