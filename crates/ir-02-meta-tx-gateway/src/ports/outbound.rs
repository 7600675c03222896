//! # Outbound Ports (Driven Ports / SPI)

use shared_types::{Address, IdentityId, RegistryError, U256};

/// Per-signer nonce storage. Unknown signers start at zero.
pub trait NonceStore: Send + Sync {
    /// Current nonce for `signer`.
    fn nonce_of(&self, signer: &Address) -> U256;

    /// Overwrite the nonce for `signer`.
    fn set_nonce(&mut self, signer: Address, nonce: U256);
}

/// Where authorized registrations are delivered.
///
/// The gateway calls this with the recovered signer as subject, exactly as
/// if the signer had called registration directly.
pub trait RegistrationTarget {
    /// Register `subject` with `recovery`.
    ///
    /// # Errors
    /// Whatever the target rejects with; the gateway propagates it unchanged.
    fn register(&mut self, subject: Address, recovery: Address) -> Result<IdentityId, RegistryError>;
}
