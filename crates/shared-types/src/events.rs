//! # Registry Events
//!
//! Events emitted on successful state transitions. Events are only
//! published after the transition has been committed.

use crate::entities::{Address, IdentityId};
use serde::{Deserialize, Serialize};

/// An event emitted by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A new identity was issued to `to`.
    Register {
        /// Custody address of the new identity.
        to: Address,
        /// The issued identifier.
        id: IdentityId,
        /// Recovery address recorded at registration.
        recovery: Address,
    },

    /// The trust gate moved from `Trusted` to `Open`.
    TrustedRegisterDisabled {
        /// The authority that opened the gate.
        by: Address,
    },

    /// Administrative authority changed hands.
    OwnershipTransferred {
        /// Previous owner.
        previous: Address,
        /// New owner.
        new: Address,
    },
}
