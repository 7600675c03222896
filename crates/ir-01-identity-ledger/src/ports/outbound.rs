//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the ledger needs: somewhere to keep records and somewhere
//! to publish events.

use crate::domain::entities::IdentityRecord;
use shared_types::{Address, IdentityId, RegistryEvent};
use std::sync::Arc;

/// Persistent storage for identity records and the id counter.
pub trait LedgerStore: Send + Sync {
    /// Look up the record for a custody address.
    fn get(&self, custody: &Address) -> Option<IdentityRecord>;

    /// The identifier the next registration will receive.
    fn next_id(&self) -> IdentityId;

    /// Store `record` and advance the counter to `next_id` in one step.
    ///
    /// Callers must have checked every precondition first; this never fails.
    fn commit(&mut self, record: IdentityRecord, next_id: IdentityId);

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Returns true if nothing has been registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sink for committed registry events.
pub trait EventSink: Send + Sync {
    /// Publish an event. Only called after the transition is committed.
    fn publish(&self, event: RegistryEvent);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn publish(&self, event: RegistryEvent) {
        (**self).publish(event);
    }
}
