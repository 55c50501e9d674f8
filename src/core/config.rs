use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_DECAY_FACTOR, DEFAULT_MAX_TAGS, DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_TOP_INTERESTS,
};

/// Tunables for the scoring core and the selector.
///
/// Decay cadence is deliberately absent: the core carries no clock, the
/// surrounding system decides when to invoke a decay step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Interest vector cardinality cap; lowest-scoring entries are evicted past it.
    pub max_tags: usize,

    /// Multiplier applied to every score by one decay step.
    pub decay_factor: f64,

    /// How many of the strongest interests seed the candidate query.
    pub top_interest_count: usize,

    /// Recommendation result size when the caller does not pick one.
    pub default_limit: usize,
}

impl PersonalizationConfig {
    pub fn new() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
            decay_factor: DEFAULT_DECAY_FACTOR,
            top_interest_count: DEFAULT_TOP_INTERESTS,
            default_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Reads overrides from `VITRINE_*` environment variables, keeping
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Some(n) = std::env::var("VITRINE_MAX_TAGS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_tags = n;
        }
        if let Some(f) = std::env::var("VITRINE_DECAY_FACTOR")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.decay_factor = f;
        }
        if let Some(n) = std::env::var("VITRINE_TOP_INTERESTS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.top_interest_count = n;
        }
        if let Some(n) = std::env::var("VITRINE_RECOMMENDATION_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.default_limit = n;
        }

        config
    }
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self::new()
    }
}
