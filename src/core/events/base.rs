use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interest::ActionKind;

/// Outcome of an accumulator or selector operation, as a value.
///
/// The engine emits these through an [`super::EventBus`] the caller
/// constructed and owns; whether to handle them inline or dispatch to a
/// background task is the caller's decision. There is no process-wide
/// implicit emitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersonalizationEvent {
    InteractionRecorded {
        user_id: String,
        action: ActionKind,
        tags_touched: usize,
        at: DateTime<Utc>,
    },
    RecordingFailed {
        user_id: String,
        reason: String,
        at: DateTime<Utc>,
    },
    VectorDecayed {
        user_id: String,
        entries: usize,
        at: DateTime<Utc>,
    },
}

impl PersonalizationEvent {
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::InteractionRecorded { user_id, .. }
            | Self::RecordingFailed { user_id, .. }
            | Self::VectorDecayed { user_id, .. } => user_id,
        }
    }
}
