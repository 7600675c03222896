//! # Identity Ledger Service
//!
//! Application service implementing `IdentityLedgerApi` over a
//! `LedgerStore` and an `EventSink`.
//!
//! Registration is a read-check-write sequence: every precondition is
//! checked before the single `commit`, and the event is published last.

use crate::domain::entities::IdentityRecord;
use crate::domain::errors::LedgerError;
use crate::domain::invariants::{check_density_invariant, check_unregistered_invariant};
use crate::ports::inbound::IdentityLedgerApi;
use crate::ports::outbound::{EventSink, LedgerStore};
use shared_types::{Address, IdentityId, RegistryEvent};
use tracing::{info, instrument, warn};

/// The Identity Ledger.
pub struct IdentityLedgerService<S: LedgerStore, E: EventSink> {
    store: S,
    events: E,
}

impl<S: LedgerStore, E: EventSink> IdentityLedgerService<S, E> {
    /// Create a ledger over the given store and event sink.
    pub fn new(store: S, events: E) -> Self {
        Self { store, events }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: LedgerStore, E: EventSink> IdentityLedgerApi for IdentityLedgerService<S, E> {
    #[instrument(skip_all, fields(subject = %subject))]
    fn register(&mut self, subject: Address, recovery: Address) -> Result<IdentityId, LedgerError> {
        let existing = self.store.get(&subject);
        if let Err(err) = check_unregistered_invariant(subject, existing.as_ref()) {
            warn!(error = %err, "registration rejected");
            return Err(err);
        }

        let id = self.store.next_id();
        let next = id.checked_next().ok_or(LedgerError::IdSpaceExhausted)?;

        self.store.commit(IdentityRecord::new(id, subject, recovery), next);
        debug_assert!(check_density_invariant(self.store.next_id(), self.store.len()));

        info!(%id, %recovery, "identity registered");
        self.events.publish(RegistryEvent::Register {
            to: subject,
            id,
            recovery,
        });

        Ok(id)
    }

    fn id_of(&self, address: &Address) -> IdentityId {
        self.store
            .get(address)
            .map_or(IdentityId::NONE, |record| record.id)
    }

    fn recovery_of(&self, address: &Address) -> Option<Address> {
        self.store.get(address).map(|record| record.recovery_address)
    }

    fn record_of(&self, address: &Address) -> Option<IdentityRecord> {
        self.store.get(address)
    }

    fn next_id(&self) -> IdentityId {
        self.store.next_id()
    }

    fn registered_count(&self) -> usize {
        self.store.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
