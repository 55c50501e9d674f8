//! Personalized-interest scoring for a storefront backend.
//!
//! Converts discrete user interactions (view, wishlist, cart, purchase) into
//! a bounded, decaying, per-user tag-affinity vector, and ranks candidate
//! products against it. Persistence, auth and HTTP glue live elsewhere; this
//! crate talks to them through the [`CatalogStore`] seam.

pub mod catalog;
pub mod core;
pub mod engine;
pub mod interest;
pub mod recommend;
pub mod utils;

pub use utils::{normalize_tag, safe_truncate};

pub use core::config::PersonalizationConfig;
pub use core::error::{Result, VitrineError};
pub use core::events::{EventBus, EventHandler, PersonalizationEvent};

pub use catalog::{CatalogStore, MemoryCatalog, Product, ProductBuilder, StoreError, Tag, TagKind, User};
pub use engine::{EngineStatsSnapshot, PersonalizationEngine};
pub use interest::{ActionKind, InterestAccumulator, InterestEntry, InterestVector};
pub use recommend::{RecommendationSelector, SelectionError};

/// Interest vector cardinality cap.
pub const DEFAULT_MAX_TAGS: usize = 25;

/// Score multiplier applied by one decay step.
pub const DEFAULT_DECAY_FACTOR: f64 = 0.9;

/// How many of the strongest interests seed the candidate query.
pub const DEFAULT_TOP_INTERESTS: usize = 5;

/// Recommendation result size when the caller does not pick one.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 8;
