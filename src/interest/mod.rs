pub mod accumulator;
pub mod models;

pub use accumulator::InterestAccumulator;
pub use models::{ActionKind, InterestEntry, InterestVector};
