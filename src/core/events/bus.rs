use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::base::PersonalizationEvent;

pub type EventHandler = Arc<dyn Fn(PersonalizationEvent) + Send + Sync>;

/// Explicit fan-out channel for personalization outcomes.
///
/// Constructed and owned by whoever wires the engine up; handlers run on
/// spawned tasks so a slow subscriber cannot stall the recording path.
pub struct EventBus {
    handlers: Arc<RwLock<Vec<EventHandler>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn register(&self, handler: EventHandler) {
        let mut handlers = self.handlers.write().await;
        handlers.push(handler);
        debug!("Registered personalization event handler ({} total)", handlers.len());
    }

    pub async fn emit(&self, event: PersonalizationEvent) {
        let handlers = self.handlers.read().await;

        if handlers.is_empty() {
            debug!("No handlers for event: {:?}", event);
            return;
        }

        for handler in handlers.iter() {
            let handler = Arc::clone(handler);
            let event = event.clone();

            tokio::spawn(async move {
                handler(event);
            });
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::ActionKind;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_event_bus_delivers_to_handlers() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        let handler: EventHandler = Arc::new(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.register(handler).await;

        let event = PersonalizationEvent::InteractionRecorded {
            user_id: "user_1".to_string(),
            action: ActionKind::Click,
            tags_touched: 2,
            at: Utc::now(),
        };
        assert_eq!(event.user_id(), "user_1");
        bus.emit(event).await;

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_emit_without_handlers_is_noop() {
        let bus = EventBus::new();
        bus.emit(PersonalizationEvent::VectorDecayed {
            user_id: "user_1".to_string(),
            entries: 0,
            at: Utc::now(),
        })
        .await;
    }
}
