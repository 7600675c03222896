//! # Gate Errors

use shared_types::{Address, RegistryError};
use thiserror::Error;

/// Errors from the trust gate and admin checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// Caller lacks the required role.
    #[error("unauthorized caller {caller}: {reason}")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
        /// Which role was required.
        reason: &'static str,
    },

    /// The gate is already `Open`.
    #[error("trusted registration already disabled")]
    AlreadyOpen,
}

impl From<GateError> for RegistryError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Unauthorized { caller, reason } => RegistryError::Unauthorized {
                caller,
                reason: reason.to_string(),
            },
            GateError::AlreadyOpen => RegistryError::AlreadyOpen,
        }
    }
}
