//! # In-Memory Nonce Store

use crate::ports::outbound::NonceStore;
use shared_types::{Address, U256};
use std::collections::HashMap;

/// Nonce store backed by a `HashMap`; absent entries read as zero.
#[derive(Debug, Default)]
pub struct InMemoryNonceStore {
    nonces: HashMap<Address, U256>,
}

impl InMemoryNonceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceStore for InMemoryNonceStore {
    fn nonce_of(&self, signer: &Address) -> U256 {
        self.nonces.get(signer).copied().unwrap_or_default()
    }

    fn set_nonce(&mut self, signer: Address, nonce: U256) {
        self.nonces.insert(signer, nonce);
    }
}
