//! # Ledger Target Adapter
//!
//! Lets the gateway deliver authorized registrations to the Identity
//! Ledger through the same `register` entry point a direct call uses.

use ir_01_identity_ledger::ports::inbound::IdentityLedgerApi;
use ir_02_meta_tx_gateway::RegistrationTarget;
use shared_types::{Address, IdentityId, RegistryError};

/// Borrowed handle to a ledger, usable as a gateway target.
pub struct LedgerTarget<'a, L: IdentityLedgerApi>(pub &'a mut L);

impl<L: IdentityLedgerApi> RegistrationTarget for LedgerTarget<'_, L> {
    fn register(&mut self, subject: Address, recovery: Address) -> Result<IdentityId, RegistryError> {
        self.0.register(subject, recovery).map_err(RegistryError::from)
    }
}
