//! # In-Memory Ledger Store

use crate::domain::entities::IdentityRecord;
use crate::ports::outbound::LedgerStore;
use shared_types::{Address, IdentityId};
use std::collections::HashMap;

/// Ledger store backed by a `HashMap`.
#[derive(Debug)]
pub struct InMemoryLedgerStore {
    records: HashMap<Address, IdentityRecord>,
    next_id: IdentityId,
}

impl InMemoryLedgerStore {
    /// Create an empty store whose first issued id will be 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: IdentityId::first(),
        }
    }

    /// All records ordered by id.
    #[must_use]
    pub fn records(&self) -> Vec<IdentityRecord> {
        let mut records: Vec<_> = self.records.values().copied().collect();
        records.sort_by_key(|r| r.id);
        records
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, custody: &Address) -> Option<IdentityRecord> {
        self.records.get(custody).copied()
    }

    fn next_id(&self) -> IdentityId {
        self.next_id
    }

    fn commit(&mut self, record: IdentityRecord, next_id: IdentityId) {
        self.records.insert(record.custody_address, record);
        self.next_id = next_id;
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
