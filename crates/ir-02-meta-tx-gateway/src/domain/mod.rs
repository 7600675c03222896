//! # Domain Layer
//!
//! Pure cryptographic and nonce logic with no I/O dependencies.

pub mod ecdsa;
pub mod eip712;
pub mod entities;
pub mod errors;
pub mod nonces;
pub mod signer;
