//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::IdentityRecord;
use crate::domain::errors::LedgerError;
use shared_types::{Address, IdentityId};

/// Primary Identity Ledger API.
///
/// Mutating calls take `&mut self`: exclusive access is the serialization
/// point, so read-check-write sequences need no further locking.
pub trait IdentityLedgerApi {
    /// Assign the next identifier to `subject` and record `recovery`.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - `subject` already holds an id; nothing changes
    /// * `IdSpaceExhausted` - the counter cannot advance
    fn register(&mut self, subject: Address, recovery: Address) -> Result<IdentityId, LedgerError>;

    /// Identifier held by `address`, or `IdentityId::NONE`.
    fn id_of(&self, address: &Address) -> IdentityId;

    /// Recovery address recorded for `address`, if registered.
    fn recovery_of(&self, address: &Address) -> Option<Address>;

    /// Full record for `address`, if registered.
    fn record_of(&self, address: &Address) -> Option<IdentityRecord>;

    /// The identifier the next registration will receive.
    fn next_id(&self) -> IdentityId;

    /// Number of identities issued so far.
    fn registered_count(&self) -> usize;
}
