//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, IdentityId};

/// A registered identity.
///
/// Created exactly once per custody address and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Sequential identifier, never zero.
    pub id: IdentityId,
    /// Address controlling the identity; the registering address.
    pub custody_address: Address,
    /// Address recorded for future recovery. Stored, not acted upon.
    pub recovery_address: Address,
}

impl IdentityRecord {
    /// Create a record for a fresh registration.
    #[must_use]
    pub fn new(id: IdentityId, custody_address: Address, recovery_address: Address) -> Self {
        Self {
            id,
            custody_address,
            recovery_address,
        }
    }
}
