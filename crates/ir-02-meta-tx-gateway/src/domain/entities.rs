//! # Domain Entities
//!
//! Core data structures for signed registration.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Length of a serialized `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

// =============================================================================
// ECDSA Types (secp256k1)
// =============================================================================

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Parse the 65-byte `r || s || v` wire form.
    ///
    /// # Errors
    /// `InvalidLength` for anything other than 65 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Serialize to the 65-byte `r || s || v` wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// `0x`-prefixed hex of the wire form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

// =============================================================================
// Registration Request
// =============================================================================

/// The typed struct a user signs to register through a relayer.
///
/// Field order and types match `Register(address to,address recovery,uint256 nonce)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Subject of the registration; must be the signer.
    pub to: Address,
    /// Recovery address to record.
    pub recovery: Address,
    /// Signer's nonce at signing time.
    pub nonce: U256,
}

impl RegistrationRequest {
    /// Create a request.
    #[must_use]
    pub fn new(to: Address, recovery: Address, nonce: U256) -> Self {
        Self {
            to,
            recovery,
            nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_wire_form() {
        let sig = EcdsaSignature {
            r: [0x11; 32],
            s: [0x22; 32],
            v: 27,
        };
        let bytes = sig.to_bytes();
        assert_eq!(bytes[64], 27);
        assert_eq!(EcdsaSignature::from_bytes(&bytes).unwrap(), sig);
        assert!(sig.to_hex().starts_with("0x1111"));
    }

    #[test]
    fn test_signature_wrong_length() {
        assert_eq!(
            EcdsaSignature::from_bytes(&[0u8; 64]),
            Err(SignatureError::InvalidLength(64))
        );
        assert_eq!(
            EcdsaSignature::from_bytes(&[]),
            Err(SignatureError::InvalidLength(0))
        );
    }
}
