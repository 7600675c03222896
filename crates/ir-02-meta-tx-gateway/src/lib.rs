//! # IR-02 Meta-Transaction Gateway
//!
//! **Subsystem ID:** 2
//!
//! Authorizes a registration whose economic caller (whoever submits and pays)
//! differs from its logical subject, using an offline EIP-712 signature.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): typed-data hashing, secp256k1 recovery,
//!   nonce rules, off-chain signing helper. Pure, no I/O.
//! - **Ports Layer** (`ports/`): `MetaTxGatewayApi` inbound; `NonceStore` and
//!   `RegistrationTarget` outbound.
//! - **Service Layer** (`service.rs`): wires domain logic to ports.
//!
//! ## Security Notes
//!
//! - **Domain Separation**: name, version, chain id and verifying contract are
//!   all bound into every digest, so a signature cannot cross contracts,
//!   chains or protocol versions.
//! - **Malleability Prevention (EIP-2)**: signatures with high S are rejected.
//! - **Replay Protection**: a request is valid only at the signer's current
//!   nonce; success advances it by exactly one.
//! - **Submitter Independence**: the submitting address plays no part in
//!   authorization.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::InMemoryNonceStore;
pub use domain::ecdsa::{address_from_pubkey, recover_address};
pub use domain::eip712::{
    domain_type_hash, register_type_hash, recover_signer, signing_digest, Eip712Domain,
    EIP712_DOMAIN_TYPE, REGISTER_TYPE,
};
pub use domain::entities::{EcdsaSignature, RegistrationRequest};
pub use domain::errors::{GatewayError, SignatureError};
pub use domain::signer::{address_from_signing_key, sign_registration};
pub use ports::inbound::MetaTxGatewayApi;
pub use ports::outbound::{NonceStore, RegistrationTarget};
pub use service::MetaTxGatewayService;

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Meta-Transaction Gateway";
