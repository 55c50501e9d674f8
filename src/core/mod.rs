pub mod config;
pub mod error;
pub mod events;

pub use config::PersonalizationConfig;
pub use error::{Result, VitrineError};
pub use events::{EventBus, EventHandler, PersonalizationEvent};
