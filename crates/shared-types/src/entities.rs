//! # Core Domain Entities
//!
//! Value objects shared by the ledger, the gateway and the registry facade.
//!
//! - **Addressing**: `Address` (20 bytes, keccak-derived, Ethereum style)
//! - **Hashing**: `Hash`, `keccak256`
//! - **Identity**: `IdentityId`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte Ethereum-style address (last 20 bytes of keccak256(pubkey)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 20]>::try_from(slice).ok().map(Self)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Left-pads the address to a 32-byte ABI word.
    #[must_use]
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Error returned when parsing an address from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    /// Not valid hexadecimal.
    #[error("invalid hex in address: {0}")]
    InvalidHex(String),

    /// Decoded to the wrong number of bytes.
    #[error("address must be 20 bytes, got {0}")]
    InvalidLength(usize),
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes).ok_or(AddressParseError::InvalidLength(bytes.len()))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Sequential identity number issued by the ledger.
///
/// Zero is reserved: it is what lookups return for unregistered addresses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(pub U256);

impl IdentityId {
    /// The "unregistered" sentinel.
    pub const NONE: Self = Self(U256::zero());

    /// The first identifier ever issued.
    #[must_use]
    pub fn first() -> Self {
        Self(U256::one())
    }

    /// Returns true unless this is the zero sentinel.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !self.0.is_zero()
    }

    /// The identifier issued after this one, or `None` on overflow.
    #[must_use]
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(U256::one()).map(Self)
    }
}

impl From<u64> for IdentityId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Debug for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityId({})", self.0)
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
