//! # Test Fixtures
//!
//! Shared setup for the integration flows and benchmarks.

use ir_02_meta_tx_gateway::{address_from_signing_key, sign_registration, Eip712Domain, RegistrationRequest};
use ir_03_id_registry::prelude::{GatePolicy, InMemoryIdRegistry, RegistryConfig};
use k256::ecdsa::SigningKey;
use shared_types::{Address, U256};

/// Deployment owner used by every fixture.
pub const OWNER: Address = Address::new([0x0E; 20]);

/// Trusted forwarder used by every fixture.
pub const FORWARDER: Address = Address::new([0xF0; 20]);

/// An arbitrary relayer that is not the trusted forwarder.
pub const RELAYER: Address = Address::new([0x77; 20]);

/// Registry address the EIP-712 domain binds to.
pub const CONTRACT: Address = Address::new([0xC0; 20]);

/// Address filled with `byte`.
pub fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

/// Domain used by [`config`].
pub fn domain() -> Eip712Domain {
    Eip712Domain::new("IdRegistry", "1", 31337, CONTRACT)
}

/// Valid configuration with the given gate policy.
pub fn config_with(gates: GatePolicy) -> RegistryConfig {
    RegistryConfig {
        domain: domain(),
        owner: OWNER,
        trusted_forwarder: FORWARDER,
        gates,
    }
}

/// Valid configuration with default gates.
pub fn config() -> RegistryConfig {
    config_with(GatePolicy::default())
}

/// Fresh in-memory registry.
pub fn registry() -> InMemoryIdRegistry {
    match InMemoryIdRegistry::in_memory(config()) {
        Ok(registry) => registry,
        Err(err) => panic!("fixture config rejected: {err}"),
    }
}

/// A signer and its address.
pub struct Signer {
    /// Private key.
    pub key: SigningKey,
    /// Derived address.
    pub address: Address,
}

impl Signer {
    /// Random signer.
    pub fn random() -> Self {
        let key = SigningKey::random(&mut rand::thread_rng());
        let address = address_from_signing_key(&key);
        Self { key, address }
    }

    /// Request registering this signer with `recovery` at `nonce`.
    pub fn request(&self, recovery: Address, nonce: u64) -> RegistrationRequest {
        RegistrationRequest::new(self.address, recovery, U256::from(nonce))
    }

    /// 65-byte signature over `request` under [`domain`].
    pub fn sign(&self, request: &RegistrationRequest) -> Vec<u8> {
        match sign_registration(&self.key, &domain(), request) {
            Ok(signature) => signature.to_bytes().to_vec(),
            Err(err) => panic!("signing failed: {err}"),
        }
    }
}
