//! # ECDSA Recovery (secp256k1)
//!
//! Recovers the Ethereum-style address that produced a signature over a
//! 32-byte digest.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must be STRICTLY LESS THAN SECP256K1_HALF_ORDER
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Constant-Time Operations**: Uses `subtle` crate for side-channel resistance

use super::entities::EcdsaSignature;
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_types::{keccak256, Address, Hash};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recover the signer's address from a signature over `digest`.
///
/// Validations performed, in order:
/// 1. R and S are in [1, n-1]
/// 2. S is in the lower half of the order (EIP-2)
/// 3. v is 0, 1, 27 or 28
/// 4. Public key recovery succeeds
///
/// # Errors
/// The first failing validation, as a `SignatureError`.
pub fn recover_address(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::InvalidFormat);
    }

    if !is_low_s(&signature.s) {
        return Err(SignatureError::MalleableSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| SignatureError::InvalidFormat)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive Ethereum address from public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 hash of public key (without 0x04 prefix)
    let hash = keccak256(&pubkey_slice[1..]);

    // Take last 20 bytes as address
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address::new(address)
}

/// Fixed-time big-endian `a < b` over 32-byte words.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut decided = Choice::from(0u8);

    for (x, y) in a.iter().zip(b.iter()) {
        let lt = Choice::from(u8::from(x < y));
        let ne = !x.ct_eq(y);
        less |= !decided & lt;
        decided |= ne;
    }

    less
}

/// EIP-2: S must be strictly below half the curve order.
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    ct_less_than(s, &SECP256K1_HALF_ORDER).into()
}

/// R and S must lie in [1, n-1].
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let is_zero = scalar.ct_eq(&[0u8; 32]);
    (!is_zero & ct_less_than(scalar, &SECP256K1_ORDER)).into()
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

/// `n - s`, the other S of the same signature.
pub(crate) fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut borrow = 0u8;
    for i in (0..32).rev() {
        let (diff, under) = SECP256K1_ORDER[i].overflowing_sub(s[i]);
        let (diff, under2) = diff.overflowing_sub(borrow);
        out[i] = diff;
        borrow = u8::from(under || under2);
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
