//! # In-Memory Event Log
//!
//! Append-only record of committed events. Stands in for the chain's log
//! index, which is outside this workspace.

use crate::ports::outbound::EventSink;
use parking_lot::Mutex;
use shared_types::RegistryEvent;
use tracing::debug;

/// Event sink that keeps every published event in order.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events published so far.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().clone()
    }

    /// Take every event published since the last drain.
    pub fn drain(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of events held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if no events are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, event: RegistryEvent) {
        debug!(?event, "event published");
        self.events.lock().push(event);
    }
}
