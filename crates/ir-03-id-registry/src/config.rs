//! # Registry Configuration
//!
//! Deployment parameters fixed at construction.
//!
//! ## Requirements
//!
//! - `owner`, `trusted_forwarder` and `domain.verifying_contract` MUST NOT be
//!   the zero address
//! - `domain.name` MUST NOT be empty

use crate::domain::trust_gate::GatePolicy;
use ir_02_meta_tx_gateway::Eip712Domain;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use thiserror::Error;

/// Default EIP-712 domain name.
pub const DEFAULT_DOMAIN_NAME: &str = "IdRegistry";

/// Default EIP-712 domain version.
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// Default chain id.
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Complete registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Signature domain.
    pub domain: Eip712Domain,
    /// Deployment authority.
    pub owner: Address,
    /// Relayer permitted while the trust gate is closed.
    pub trusted_forwarder: Address,
    /// Which entry points the trust gate governs.
    pub gates: GatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            domain: Eip712Domain::new(
                DEFAULT_DOMAIN_NAME,
                DEFAULT_DOMAIN_VERSION,
                DEFAULT_CHAIN_ID,
                Address::ZERO, // MUST be overridden
            ),
            owner: Address::ZERO,             // MUST be overridden
            trusted_forwarder: Address::ZERO, // MUST be overridden
            gates: GatePolicy::default(),
        }
    }
}

impl RegistryConfig {
    /// Check the configuration can back a live registry.
    ///
    /// # Errors
    /// The first missing or invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.name.is_empty() {
            return Err(ConfigError::EmptyDomainName);
        }
        if self.domain.verifying_contract.is_zero() {
            return Err(ConfigError::ZeroAddress("verifying_contract"));
        }
        if self.owner.is_zero() {
            return Err(ConfigError::ZeroAddress("owner"));
        }
        if self.trusted_forwarder.is_zero() {
            return Err(ConfigError::ZeroAddress("trusted_forwarder"));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required address was left at zero.
    #[error("{0} is the zero address; it must be configured")]
    ZeroAddress(&'static str),

    /// The EIP-712 domain name is empty.
    #[error("EIP-712 domain name must not be empty")]
    EmptyDomainName,
}
