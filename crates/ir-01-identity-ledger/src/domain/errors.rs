//! # Ledger Errors

use shared_types::{Address, IdentityId, RegistryError};
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The subject already holds an identifier.
    #[error("{address} is already registered with id {id}")]
    AlreadyRegistered {
        /// The rejected subject.
        address: Address,
        /// The identifier it already holds.
        id: IdentityId,
    },

    /// The counter reached `U256::MAX`.
    #[error("identifier space exhausted")]
    IdSpaceExhausted,
}

impl From<LedgerError> for RegistryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AlreadyRegistered { address, id } => {
                RegistryError::AlreadyRegistered { address, id }
            }
            LedgerError::IdSpaceExhausted => RegistryError::IdSpaceExhausted,
        }
    }
}
