//! # Transaction Wire Format
//!
//! One JSON object per line in each direction. Requests are tagged by `op`:
//!
//! ```text
//! {"op":"register","ctx":{"caller":"0x.."},"recovery":"0x.."}
//! {"op":"submit_signed_registration","ctx":{"caller":"0x.."},"to":"0x..","recovery":"0x..","nonce":"0x0","signature":"0x..(65 bytes)"}
//! {"op":"disable_trusted_register","ctx":{"caller":"0x.."}}
//! {"op":"transfer_ownership","ctx":{"caller":"0x.."},"new_owner":"0x.."}
//! {"op":"id_of","address":"0x.."}
//! ```
//!
//! Integers (`nonce`, `id`) use the 0x-prefixed hex form of `U256`.

use ir_03_id_registry::domain::call_context::CallContext;
use serde::{Deserialize, Serialize};
use shared_types::{Address, IdentityId, RegistryError, RegistryEvent, U256};

/// A request to the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transaction {
    /// Direct registration of the effective sender.
    Register {
        /// Who is calling.
        ctx: CallContext,
        /// Recovery address to record.
        recovery: Address,
    },
    /// Relayed registration authorized by an EIP-712 signature.
    SubmitSignedRegistration {
        /// Who is submitting.
        ctx: CallContext,
        /// Subject and claimed signer.
        to: Address,
        /// Recovery address to record.
        recovery: Address,
        /// Signer's nonce.
        nonce: U256,
        /// Hex-encoded 65-byte `r ‖ s ‖ v` signature.
        signature: String,
    },
    /// Open the trust gate.
    DisableTrustedRegister {
        /// Who is calling.
        ctx: CallContext,
    },
    /// Hand over the owner role.
    TransferOwnership {
        /// Who is calling.
        ctx: CallContext,
        /// Next owner.
        new_owner: Address,
    },
    /// Look up an identifier.
    IdOf {
        /// Custody address.
        address: Address,
    },
    /// Look up a meta-transaction nonce.
    NonceOf {
        /// Signer address.
        address: Address,
    },
    /// Look up a recovery address.
    RecoveryOf {
        /// Custody address.
        address: Address,
    },
}

/// Outcome of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    /// Applied (or answered, for queries).
    Success,
    /// Rejected without any state change.
    Failure,
}

/// Error reported in a failed receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptError {
    /// Stable error code, e.g. `InvalidNonce`.
    pub code: String,
    /// Human-readable detail.
    pub message: String,
}

impl From<&RegistryError> for ReceiptError {
    fn from(err: &RegistryError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result of one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Success or failure.
    pub status: ReceiptStatus,
    /// Identifier issued or looked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IdentityId>,
    /// Address answered by a query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Nonce answered by a query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U256>,
    /// Why the transaction failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ReceiptError>,
    /// Events committed by the transaction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<RegistryEvent>,
}

impl Receipt {
    /// An empty successful receipt.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: ReceiptStatus::Success,
            id: None,
            address: None,
            nonce: None,
            error: None,
            events: Vec::new(),
        }
    }

    /// A failed receipt carrying `error`.
    #[must_use]
    pub fn failure(error: ReceiptError) -> Self {
        Self {
            status: ReceiptStatus::Failure,
            error: Some(error),
            ..Self::success()
        }
    }

    /// Returns true if the transaction succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ReceiptStatus::Success
    }

    /// Error code of a failed receipt.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}
