//! # EIP-712 Typed Data
//!
//! Domain separator and struct hashing for the registration request.
//!
//! ```text
//! domainSeparator = keccak256(typeHash(EIP712Domain) ‖ keccak256(name) ‖ keccak256(version)
//!                             ‖ uint256(chainId) ‖ address(verifyingContract))
//! structHash      = keccak256(typeHash(Register) ‖ address(to) ‖ address(recovery) ‖ uint256(nonce))
//! digest          = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! The type strings below are what off-chain signers hash. Changing a field
//! name, type or order makes every existing signature unverifiable.

use super::ecdsa::recover_address;
use super::entities::{EcdsaSignature, RegistrationRequest};
use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use shared_types::{keccak256, Address, Hash, U256};

/// Canonical EIP-712 domain type.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Registration struct type.
pub const REGISTER_TYPE: &str = "Register(address to,address recovery,uint256 nonce)";

/// keccak256 of [`EIP712_DOMAIN_TYPE`].
#[must_use]
pub fn domain_type_hash() -> Hash {
    keccak256(EIP712_DOMAIN_TYPE.as_bytes())
}

/// keccak256 of [`REGISTER_TYPE`].
#[must_use]
pub fn register_type_hash() -> Hash {
    keccak256(REGISTER_TYPE.as_bytes())
}

/// Parameters binding a signature to one registry deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    /// Protocol name.
    pub name: String,
    /// Protocol version.
    pub version: String,
    /// Chain the registry lives on.
    pub chain_id: u64,
    /// Address of the registry itself.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Create a domain.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }

    /// The domain separator hash.
    #[must_use]
    pub fn separator(&self) -> Hash {
        let mut encoded = Vec::with_capacity(5 * 32);
        encoded.extend_from_slice(&domain_type_hash());
        encoded.extend_from_slice(&keccak256(self.name.as_bytes()));
        encoded.extend_from_slice(&keccak256(self.version.as_bytes()));
        encoded.extend_from_slice(&u256_word(U256::from(self.chain_id)));
        encoded.extend_from_slice(&self.verifying_contract.to_word());
        keccak256(&encoded)
    }
}

impl RegistrationRequest {
    /// `hashStruct(Register)` for this request.
    #[must_use]
    pub fn struct_hash(&self) -> Hash {
        let mut encoded = Vec::with_capacity(4 * 32);
        encoded.extend_from_slice(&register_type_hash());
        encoded.extend_from_slice(&self.to.to_word());
        encoded.extend_from_slice(&self.recovery.to_word());
        encoded.extend_from_slice(&u256_word(self.nonce));
        keccak256(&encoded)
    }
}

/// Digest a signer signs for `request` under `domain`.
#[must_use]
pub fn signing_digest(domain: &Eip712Domain, request: &RegistrationRequest) -> Hash {
    digest_with_separator(&domain.separator(), request)
}

/// Digest using a precomputed domain separator.
#[must_use]
pub fn digest_with_separator(separator: &Hash, request: &RegistrationRequest) -> Hash {
    let mut encoded = [0u8; 66];
    encoded[0] = 0x19;
    encoded[1] = 0x01;
    encoded[2..34].copy_from_slice(separator);
    encoded[34..].copy_from_slice(&request.struct_hash());
    keccak256(&encoded)
}

/// Recover the address that signed `request` under `domain`.
///
/// # Errors
/// Any `SignatureError` from recovery.
pub fn recover_signer(
    domain: &Eip712Domain,
    request: &RegistrationRequest,
    signature: &EcdsaSignature,
) -> Result<Address, SignatureError> {
    recover_address(&signing_digest(domain, request), signature)
}

/// Big-endian 32-byte ABI encoding of a `uint256`.
fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}
