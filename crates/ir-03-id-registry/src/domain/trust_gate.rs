//! # Trust Gate
//!
//! One-shot switch restricting gated entry points to the trusted forwarder.
//! Modeled as an enum so the single transition and its terminal state are
//! explicit, and a second disable is a detectable error.

use super::errors::GateError;
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Gate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustGate {
    /// Gated calls must come from the trusted forwarder.
    #[default]
    Trusted,
    /// Any caller is accepted. Terminal.
    Open,
}

impl TrustGate {
    /// Move `Trusted` to `Open`.
    ///
    /// # Errors
    /// `AlreadyOpen` if the gate is already open.
    pub fn disable(&mut self) -> Result<(), GateError> {
        match self {
            Self::Trusted => {
                *self = Self::Open;
                Ok(())
            }
            Self::Open => Err(GateError::AlreadyOpen),
        }
    }

    /// Returns true while the gate restricts callers.
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }

    /// Admit `caller` to an entry point.
    ///
    /// Ungated entry points and an open gate admit everyone.
    ///
    /// # Errors
    /// `Unauthorized` if the entry point is gated, the gate is `Trusted`, and
    /// `caller` is not `trusted_forwarder`.
    pub fn admit(
        &self,
        gated: bool,
        caller: Address,
        trusted_forwarder: Address,
    ) -> Result<(), GateError> {
        if gated && self.is_trusted() && caller != trusted_forwarder {
            return Err(GateError::Unauthorized {
                caller,
                reason: "only the trusted forwarder may register while trusted registration is on",
            });
        }
        Ok(())
    }
}

/// Which entry points the gate governs. Each is configured independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Gate direct `register` calls.
    pub gate_direct: bool,
    /// Gate relayed `submit_signed_registration` calls.
    pub gate_relayed: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            gate_direct: false,
            gate_relayed: true,
        }
    }
}
