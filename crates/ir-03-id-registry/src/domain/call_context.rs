//! # Call Context
//!
//! Who is calling. A call either arrives directly (`caller` is the subject)
//! or through a forwarder that appends the original sender, ERC-2771 style.
//! The appended sender is honored only when the immediate caller is the
//! trusted forwarder; anyone else claiming to forward is treated as calling
//! for themselves.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Immediate caller plus an optional forwarded sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Address that submitted (and pays for) the call.
    pub caller: Address,
    /// Original sender appended by a forwarder, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded_for: Option<Address>,
}

impl CallContext {
    /// A call made directly by `caller`.
    #[must_use]
    pub fn direct(caller: Address) -> Self {
        Self {
            caller,
            forwarded_for: None,
        }
    }

    /// A call relayed by `forwarder` on behalf of `sender`.
    #[must_use]
    pub fn forwarded(forwarder: Address, sender: Address) -> Self {
        Self {
            caller: forwarder,
            forwarded_for: Some(sender),
        }
    }

    /// The address the call acts for.
    #[must_use]
    pub fn effective_sender(&self, trusted_forwarder: Address) -> Address {
        match self.forwarded_for {
            Some(sender) if self.caller == trusted_forwarder => sender,
            _ => self.caller,
        }
    }
}
