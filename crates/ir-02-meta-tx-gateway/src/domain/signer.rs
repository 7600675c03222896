//! # Off-Chain Signer
//!
//! What a user's wallet does before handing a request to a relayer: hash the
//! typed struct under the registry's domain and sign the digest.
//! Signatures are normalized to low S so the gateway accepts them.

use super::ecdsa::{address_from_pubkey, invert_s, is_low_s};
use super::eip712::{signing_digest, Eip712Domain};
use super::entities::{EcdsaSignature, RegistrationRequest};
use super::errors::SignatureError;
use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash};

/// Sign a registration request for submission through a relayer.
///
/// # Errors
/// `SigningFailed` if the key cannot produce a signature.
pub fn sign_registration(
    key: &SigningKey,
    domain: &Eip712Domain,
    request: &RegistrationRequest,
) -> Result<EcdsaSignature, SignatureError> {
    sign_digest(&signing_digest(domain, request), key)
}

/// Address controlled by a signing key.
#[must_use]
pub fn address_from_signing_key(key: &SigningKey) -> Address {
    address_from_pubkey(key.verifying_key())
}

/// Sign a 32-byte digest, producing a low-S signature with v in {27, 28}.
pub(crate) fn sign_digest(digest: &Hash, key: &SigningKey) -> Result<EcdsaSignature, SignatureError> {
    let (sig, recid) = key
        .sign_prehash_recoverable(digest)
        .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    // Normalize S to low value (EIP-2); inverting S flips the recovery id
    let (s, parity) = if is_low_s(&s) {
        (s, recid.to_byte() & 1)
    } else {
        (invert_s(&s), (recid.to_byte() & 1) ^ 1)
    };

    Ok(EcdsaSignature { r, s, v: 27 + parity })
}
