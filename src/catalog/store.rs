use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::interest::InterestVector;

use super::models::{Product, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Document-store seam the engine talks through.
///
/// Candidate queries must return only active, in-stock products. Saving an
/// interest vector replaces the whole stored vector for that user — the
/// read-modify-write cycle above it is last-write-wins under races.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn user(&self, user_id: &str) -> Result<Option<User>, StoreError>;

    async fn save_interests(
        &self,
        user_id: &str,
        vector: &InterestVector,
    ) -> Result<(), StoreError>;

    /// Candidates whose normalized tag values intersect `tag_values` (any match).
    async fn active_by_tags(&self, tag_values: &[String]) -> Result<Vec<Product>, StoreError>;

    /// Cold-start ranking: rating average descending, then newest first.
    async fn top_rated(&self, limit: usize) -> Result<Vec<Product>, StoreError>;
}

/// In-memory catalog honoring the same filter and ordering contracts,
/// backing the tests and the demo binary.
pub struct MemoryCatalog {
    users: RwLock<HashMap<String, User>>,
    products: RwLock<HashMap<String, Product>>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        info!("MemoryCatalog initialized");
        Self {
            users: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
        }
    }

    pub fn upsert_user(&self, user: User) {
        self.users.write().insert(user.user_id.clone(), user);
    }

    pub fn insert_product(&self, product: Product) {
        self.products
            .write()
            .insert(product.product_id.clone(), product);
    }

    pub fn product_count(&self) -> usize {
        self.products.read().len()
    }

    fn available_products(&self) -> Vec<Product> {
        self.products
            .read()
            .values()
            .filter(|p| p.is_available())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().get(user_id).cloned())
    }

    async fn save_interests(
        &self,
        user_id: &str,
        vector: &InterestVector,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write();
        match users.get_mut(user_id) {
            Some(user) => {
                user.personalized_tags = vector.clone();
                Ok(())
            }
            None => Err(StoreError::Query(format!("unknown user: {user_id}"))),
        }
    }

    async fn active_by_tags(&self, tag_values: &[String]) -> Result<Vec<Product>, StoreError> {
        let hits: Vec<Product> = self
            .available_products()
            .into_iter()
            .filter(|p| {
                p.tags
                    .iter()
                    .any(|t| tag_values.iter().any(|v| *v == t.normalized_value()))
            })
            .collect();

        debug!("Tag candidate query matched {} products", hits.len());
        Ok(hits)
    }

    async fn top_rated(&self, limit: usize) -> Result<Vec<Product>, StoreError> {
        let mut products = self.available_products();

        products.sort_by(|a, b| {
            b.rating_average
                .partial_cmp(&a.rating_average)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        products.truncate(limit);

        Ok(products)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}
