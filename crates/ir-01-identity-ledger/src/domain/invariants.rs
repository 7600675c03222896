//! # Domain Invariants
//!
//! - INVARIANT-1: an address with a nonzero id can never re-register.
//! - INVARIANT-2: ids are dense; after N registrations the counter is N + 1.

use super::entities::IdentityRecord;
use super::errors::LedgerError;
use shared_types::{Address, IdentityId, U256};

/// INVARIANT-1: Write-once custody mapping.
///
/// # Errors
/// `AlreadyRegistered` if `existing` holds a record.
pub fn check_unregistered_invariant(
    subject: Address,
    existing: Option<&IdentityRecord>,
) -> Result<(), LedgerError> {
    match existing {
        Some(record) => Err(LedgerError::AlreadyRegistered {
            address: subject,
            id: record.id,
        }),
        None => Ok(()),
    }
}

/// INVARIANT-2: Dense assignment.
///
/// With `registered` records stored, the next id to issue must be
/// `registered + 1`.
#[must_use]
pub fn check_density_invariant(next_id: IdentityId, registered: usize) -> bool {
    next_id.0 == U256::from(registered) + U256::one()
}
