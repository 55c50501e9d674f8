use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogStore, Product};
use crate::core::config::PersonalizationConfig;
use crate::core::error::Result;
use crate::core::events::{EventBus, PersonalizationEvent};
use crate::interest::{ActionKind, InterestAccumulator, InterestVector};
use crate::recommend::RecommendationSelector;
use crate::utils::safe_truncate;

/// Facade the storefront's handlers call.
///
/// The write path (interaction recording) is best-effort: failures are
/// logged, counted, emitted as events and swallowed, so the caller's primary
/// operation never fails on account of personalization. The read path
/// (recommendations) propagates store failures to the API boundary.
///
/// The unit of mutation is a full-vector read-modify-write; racing
/// interactions for the same user are last-write-wins. Personalization is
/// approximate by design.
pub struct PersonalizationEngine {
    store: Arc<dyn CatalogStore>,
    accumulator: InterestAccumulator,
    selector: RecommendationSelector,
    events: Arc<EventBus>,
    stats: EngineStats,
}

#[derive(Default)]
struct EngineStats {
    interactions_recorded: AtomicU64,
    recording_failures: AtomicU64,
    selections_served: AtomicU64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStatsSnapshot {
    pub interactions_recorded: u64,
    pub recording_failures: u64,
    pub selections_served: u64,
}

impl PersonalizationEngine {
    pub fn new(store: Arc<dyn CatalogStore>, config: PersonalizationConfig) -> Self {
        info!(
            "PersonalizationEngine initialized (max_tags={}, decay_factor={})",
            config.max_tags, config.decay_factor
        );
        Self {
            accumulator: InterestAccumulator::new(&config),
            selector: RecommendationSelector::new(Arc::clone(&store), &config),
            store,
            events: Arc::new(EventBus::new()),
            stats: EngineStats::default(),
        }
    }

    /// Replaces the default (handlerless) bus with one the caller owns.
    #[must_use]
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Best-effort recording: any failure is swallowed here. Callers on a
    /// hot path may also `tokio::spawn` this without awaiting.
    pub async fn record_interaction(&self, user_id: &str, product: &Product, action: ActionKind) {
        if let Err(e) = self.try_record_interaction(user_id, product, action).await {
            self.stats.recording_failures.fetch_add(1, Ordering::Relaxed);
            warn!(
                "Interaction recording failed for {}: {}",
                safe_truncate(user_id, 12),
                e
            );
            self.events
                .emit(PersonalizationEvent::RecordingFailed {
                    user_id: user_id.to_string(),
                    reason: e.to_string(),
                    at: Utc::now(),
                })
                .await;
        }
    }

    /// Fallible recording, for callers that want the outcome as a value.
    /// A missing user is an ignorable no-op, not an error.
    pub async fn try_record_interaction(
        &self,
        user_id: &str,
        product: &Product,
        action: ActionKind,
    ) -> Result<()> {
        let Some(mut user) = self.store.user(user_id).await? else {
            debug!(
                "Ignoring {:?} interaction for unknown user {}",
                action,
                safe_truncate(user_id, 12)
            );
            return Ok(());
        };

        let touched = self
            .accumulator
            .record(&mut user.personalized_tags, &product.tags, action);
        if touched == 0 {
            debug!("No contributing tags on product {}", product.product_id);
            return Ok(());
        }

        self.store
            .save_interests(user_id, &user.personalized_tags)
            .await?;
        self.stats.interactions_recorded.fetch_add(1, Ordering::Relaxed);

        self.events
            .emit(PersonalizationEvent::InteractionRecorded {
                user_id: user_id.to_string(),
                action,
                tags_touched: touched,
                at: Utc::now(),
            })
            .await;

        Ok(())
    }

    /// Applies one decay step to the user's vector. When to call this (per
    /// login, weekly) is the surrounding system's policy, not the engine's.
    pub async fn decay_interests(&self, user_id: &str) -> Result<()> {
        let Some(mut user) = self.store.user(user_id).await? else {
            debug!("Ignoring decay for unknown user {}", safe_truncate(user_id, 12));
            return Ok(());
        };

        if user.personalized_tags.is_empty() {
            return Ok(());
        }

        self.accumulator.decay(&mut user.personalized_tags);
        self.store
            .save_interests(user_id, &user.personalized_tags)
            .await?;

        self.events
            .emit(PersonalizationEvent::VectorDecayed {
                user_id: user_id.to_string(),
                entries: user.personalized_tags.len(),
                at: Utc::now(),
            })
            .await;

        Ok(())
    }

    /// Ranked products for the user; unknown users get the cold-start
    /// ranking. Store failures surface to the caller.
    pub async fn recommendations_for(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Product>> {
        let vector = match self.store.user(user_id).await? {
            Some(user) => user.personalized_tags,
            None => InterestVector::new(),
        };

        let ranked = self.selector.select(&vector, limit).await?;
        self.stats.selections_served.fetch_add(1, Ordering::Relaxed);

        info!(
            "✅ Served {} recommendations for {}",
            ranked.len(),
            safe_truncate(user_id, 12)
        );
        Ok(ranked)
    }

    pub fn stats(&self) -> EngineStatsSnapshot {
        EngineStatsSnapshot {
            interactions_recorded: self.stats.interactions_recorded.load(Ordering::Relaxed),
            recording_failures: self.stats.recording_failures.load(Ordering::Relaxed),
            selections_served: self.stats.selections_served.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for PersonalizationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalizationEngine")
            .field("store", &"CatalogStore")
            .field("selector", &"RecommendationSelector")
            .finish()
    }
}
