use tracing::debug;

use crate::catalog::Tag;
use crate::core::config::PersonalizationConfig;
use crate::utils::normalize_tag;

use super::models::{ActionKind, InterestVector};

/// Converts discrete product interactions into weighted interest scores.
///
/// Pure and synchronous: no clock, no storage, no error paths. The caller
/// owns the vector and persists it afterwards.
pub struct InterestAccumulator {
    max_tags: usize,
    decay_factor: f64,
}

impl InterestAccumulator {
    pub fn new(config: &PersonalizationConfig) -> Self {
        Self {
            max_tags: config.max_tags,
            decay_factor: config.decay_factor,
        }
    }

    /// Applies one interaction to the vector; returns how many entries were touched.
    ///
    /// Per tag: `increment = action.weight() * tag_weight * kind_multiplier`.
    /// Brand tags and tags normalizing to an empty value contribute nothing.
    /// The vector is re-capped afterwards, so its cardinality never exceeds
    /// `max_tags`.
    pub fn record(&self, vector: &mut InterestVector, tags: &[Tag], action: ActionKind) -> usize {
        let action_weight = action.weight();
        let mut touched = 0;

        for tag in tags {
            let multiplier = tag.kind.affinity_multiplier();
            if multiplier == 0.0 {
                continue;
            }

            let key = normalize_tag(&tag.value);
            if key.is_empty() {
                continue;
            }

            vector.bump(&key, action_weight * tag.effective_weight() * multiplier);
            touched += 1;
        }

        if vector.len() > self.max_tags {
            vector.evict_to(self.max_tags);
            debug!("Interest vector capped at top {}", self.max_tags);
        }

        touched
    }

    /// One decay step: every score shrinks by `decay_factor`.
    ///
    /// Never negative, never reorders distinct scores. Cadence is the
    /// surrounding system's policy.
    pub fn decay(&self, vector: &mut InterestVector) {
        if vector.is_empty() {
            return;
        }
        vector.scale(self.decay_factor);
    }
}

impl Default for InterestAccumulator {
    fn default() -> Self {
        Self::new(&PersonalizationConfig::default())
    }
}
