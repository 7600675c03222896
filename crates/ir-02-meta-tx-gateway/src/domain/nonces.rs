//! # Nonce Rules
//!
//! A request is valid only at the signer's current nonce, and success
//! advances it by exactly one. This makes each signed request single-use and
//! orders a signer's requests strictly: once a nonce is consumed, any other
//! request signed for it is permanently dead.

use super::errors::GatewayError;
use shared_types::{Address, U256};

/// Check `provided` against `current` and return the advanced nonce.
///
/// # Errors
/// `InvalidNonce` on any mismatch, covering replays and out-of-order requests.
pub fn advance(signer: Address, current: U256, provided: U256) -> Result<U256, GatewayError> {
    if provided != current {
        return Err(GatewayError::InvalidNonce {
            signer,
            expected: current,
            provided,
        });
    }
    // A u256 nonce advanced one step per registration cannot wrap in practice
    Ok(current.saturating_add(U256::one()))
}
