//! # Error Types
//!
//! The failure taxonomy every registry entry point reports.
//!
//! Subsystem crates keep richer error enums and convert into
//! [`RegistryError`]. All failures are atomic: a call that returns one of
//! these left no observable state change behind.

use crate::entities::{Address, IdentityId, U256};
use thiserror::Error;

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The subject already holds an identifier.
    #[error("already registered: {address} holds id {id}")]
    AlreadyRegistered { address: Address, id: IdentityId },

    /// Signature malformed, or recovered signer differs from the subject.
    #[error("invalid signature: {reason}")]
    InvalidSignature { reason: String },

    /// Nonce does not match the signer's stored nonce (replay or out of order).
    #[error("invalid nonce for {signer}: expected {expected}, got {provided}")]
    InvalidNonce {
        signer: Address,
        expected: U256,
        provided: U256,
    },

    /// Caller is neither the trusted forwarder nor the authority for a gated call.
    #[error("unauthorized caller {caller}: {reason}")]
    Unauthorized { caller: Address, reason: String },

    /// The trust gate has already been opened.
    #[error("trusted registration already disabled")]
    AlreadyOpen,

    /// The identifier counter cannot advance any further.
    #[error("identifier space exhausted")]
    IdSpaceExhausted,

    /// An administrative argument was the zero address.
    #[error("{field} must not be the zero address")]
    ZeroAddress { field: &'static str },
}

impl RegistryError {
    /// Short stable code for receipts and logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered { .. } => "AlreadyRegistered",
            Self::InvalidSignature { .. } => "InvalidSignature",
            Self::InvalidNonce { .. } => "InvalidNonce",
            Self::Unauthorized { .. } => "Unauthorized",
            Self::AlreadyOpen => "AlreadyOpen",
            Self::IdSpaceExhausted => "IdSpaceExhausted",
            Self::ZeroAddress { .. } => "ZeroAddress",
        }
    }
}
