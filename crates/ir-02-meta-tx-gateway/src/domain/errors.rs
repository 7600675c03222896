//! # Gateway Errors
//!
//! `SignatureError` covers everything that can go wrong turning bytes into a
//! signer address; `GatewayError` adds the authorization and nonce checks.
//! Both collapse into the shared taxonomy via `From<GatewayError> for RegistryError`.

use shared_types::{Address, RegistryError, U256};
use thiserror::Error;

/// Errors that can occur during signature recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature is not 65 bytes.
    #[error("Invalid signature length: {0} (expected 65)")]
    InvalidLength(usize),

    /// R or S is zero or not below the curve order.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {expected}, got {actual}")]
    SignerMismatch { expected: Address, actual: Address },

    /// Signing with a local key failed.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Errors from `submit_signed_registration`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Signature could not be verified for the claimed subject.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// Request nonce is not the signer's current nonce.
    #[error("Invalid nonce for {signer}: expected {expected}, got {provided}")]
    InvalidNonce {
        signer: Address,
        expected: U256,
        provided: U256,
    },

    /// The registration target rejected the request; passed through unchanged.
    #[error(transparent)]
    Target(#[from] RegistryError),
}

impl From<GatewayError> for RegistryError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Signature(sig) => RegistryError::InvalidSignature {
                reason: sig.to_string(),
            },
            GatewayError::InvalidNonce {
                signer,
                expected,
                provided,
            } => RegistryError::InvalidNonce {
                signer,
                expected,
                provided,
            },
            GatewayError::Target(inner) => inner,
        }
    }
}
