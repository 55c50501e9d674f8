pub mod selector;

pub use selector::{RecommendationSelector, SelectionError};
