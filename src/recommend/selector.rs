use std::cmp::Ordering;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{CatalogStore, Product, StoreError};
use crate::core::config::PersonalizationConfig;
use crate::interest::InterestVector;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Catalog query failed: {0}")]
    Store(#[from] StoreError),
}

/// Ranks candidate products against an interest vector.
///
/// Two states, gated purely on vector emptiness: cold start serves the
/// catalog's top-rated products; personalized selection scores candidates
/// that share any of the user's strongest tags. Stateless across calls.
pub struct RecommendationSelector {
    store: Arc<dyn CatalogStore>,
    top_interest_count: usize,
    default_limit: usize,
}

impl RecommendationSelector {
    pub fn new(store: Arc<dyn CatalogStore>, config: &PersonalizationConfig) -> Self {
        info!(
            "RecommendationSelector initialized (top_interests={}, default_limit={})",
            config.top_interest_count, config.default_limit
        );
        Self {
            store,
            top_interest_count: config.top_interest_count,
            default_limit: config.default_limit,
        }
    }

    pub async fn select(
        &self,
        vector: &InterestVector,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, SelectionError> {
        let limit = limit.unwrap_or(self.default_limit);

        if vector.is_empty() {
            return self.cold_start(limit).await;
        }
        self.personalized(vector, limit).await
    }

    async fn cold_start(&self, limit: usize) -> Result<Vec<Product>, SelectionError> {
        debug!("No interest signal, serving top rated");
        Ok(self.store.top_rated(limit).await?)
    }

    async fn personalized(
        &self,
        vector: &InterestVector,
        limit: usize,
    ) -> Result<Vec<Product>, SelectionError> {
        let top_tags: Vec<String> = vector
            .top_tags(self.top_interest_count)
            .into_iter()
            .map(|e| e.tag)
            .collect();

        let candidates = self.store.active_by_tags(&top_tags).await?;
        let candidate_count = candidates.len();

        let mut scored: Vec<(f64, Product)> = candidates
            .into_iter()
            .map(|p| (Self::match_score(vector, &p), p))
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.1.rating_average
                        .partial_cmp(&a.1.rating_average)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| b.1.created_at.cmp(&a.1.created_at))
        });

        let ranked: Vec<Product> = scored.into_iter().take(limit).map(|(_, p)| p).collect();
        debug!(
            "Personalized selection kept {} of {} candidates",
            ranked.len(),
            candidate_count
        );
        Ok(ranked)
    }

    /// Weighted sum of interest scores over the tags shared with the
    /// candidate; tags absent from the vector contribute nothing.
    pub fn match_score(vector: &InterestVector, product: &Product) -> f64 {
        product
            .tags
            .iter()
            .filter_map(|tag| {
                vector
                    .score(&tag.normalized_value())
                    .map(|s| s * tag.effective_weight())
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, Tag, TagKind};
    use chrono::{Duration, Utc};

    fn seeded_catalog() -> Arc<MemoryCatalog> {
        let catalog = MemoryCatalog::new();
        let now = Utc::now();

        let chair = Product::builder()
            .product_id("p_chair")
            .name("Oak chair")
            .rating_average(4.0)
            .stock(5)
            .tags(vec![
                Tag::new(TagKind::Attribute, "wood"),
                Tag::new(TagKind::Category, "furniture"),
            ])
            .created_at(now - Duration::days(30))
            .build();

        let desk = Product::builder()
            .product_id("p_desk")
            .name("Walnut desk")
            .rating_average(4.8)
            .stock(2)
            .tags(vec![
                Tag::weighted(TagKind::Attribute, "wood", 2.0),
                Tag::new(TagKind::Category, "furniture"),
            ])
            .created_at(now - Duration::days(5))
            .build();

        let lamp = Product::builder()
            .product_id("p_lamp")
            .name("Steel lamp")
            .rating_average(4.9)
            .stock(8)
            .tags(vec![Tag::new(TagKind::Attribute, "steel")])
            .created_at(now - Duration::days(1))
            .build();

        catalog.insert_product(chair);
        catalog.insert_product(desk);
        catalog.insert_product(lamp);
        Arc::new(catalog)
    }

    fn selector(catalog: Arc<MemoryCatalog>) -> RecommendationSelector {
        RecommendationSelector::new(catalog, &PersonalizationConfig::default())
    }

    fn wood_vector() -> InterestVector {
        let mut vector = InterestVector::new();
        vector.bump("wood", 6.0);
        vector.bump("furniture", 1.2);
        vector
    }

    #[tokio::test]
    async fn test_cold_start_serves_top_rated() {
        let selector = selector(seeded_catalog());
        let picks = selector
            .select(&InterestVector::new(), Some(2))
            .await
            .unwrap();

        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].product_id, "p_lamp");
        assert_eq!(picks[1].product_id, "p_desk");
    }

    #[tokio::test]
    async fn test_personalized_ranks_by_match_score() {
        let selector = selector(seeded_catalog());
        let picks = selector.select(&wood_vector(), Some(8)).await.unwrap();

        // Desk: 6*2 + 1.2 = 13.2; chair: 6 + 1.2 = 7.2. Lamp shares no tag
        // with the top interests, so it is not a candidate at all.
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].product_id, "p_desk");
        assert_eq!(picks[1].product_id, "p_chair");
    }

    #[tokio::test]
    async fn test_ranking_never_places_lower_match_above_higher() {
        let selector = selector(seeded_catalog());
        let vector = wood_vector();
        let picks = selector.select(&vector, Some(8)).await.unwrap();

        let scores: Vec<f64> = picks
            .iter()
            .map(|p| RecommendationSelector::match_score(&vector, p))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_selection_is_idempotent() {
        let selector = selector(seeded_catalog());
        let vector = wood_vector();

        let first: Vec<String> = selector
            .select(&vector, Some(8))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_id)
            .collect();
        let second: Vec<String> = selector
            .select(&vector, Some(8))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_id)
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_limit_truncates_without_padding() {
        let selector = selector(seeded_catalog());
        let picks = selector.select(&wood_vector(), Some(1)).await.unwrap();
        assert_eq!(picks.len(), 1);

        let all = selector.select(&wood_vector(), Some(50)).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_match_score_ignores_unknown_tags() {
        let vector = wood_vector();
        let product = Product::builder()
            .tags(vec![
                Tag::new(TagKind::Attribute, "Wood"),
                Tag::new(TagKind::Attribute, "glass"),
            ])
            .build();

        assert!((RecommendationSelector::match_score(&vector, &product) - 6.0).abs() < 1e-9);
    }
}
