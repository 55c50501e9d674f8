pub mod base;
pub mod bus;

pub use base::PersonalizationEvent;
pub use bus::{EventBus, EventHandler};
