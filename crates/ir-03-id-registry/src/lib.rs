//! # IR-03 Id Registry
//!
//! **Subsystem ID:** 3
//!
//! The registry facade: owns the Identity Ledger (IR-01) and the
//! Meta-Transaction Gateway (IR-02), guards both entry points with the
//! trust gate, and exposes the admin surface.
//!
//! ## Entry Points
//!
//! | Operation | Gate | Subject |
//! |-----------|------|---------|
//! | `register` | `GatePolicy::gate_direct` (default off) | effective sender of the call |
//! | `submit_signed_registration` | `GatePolicy::gate_relayed` (default on) | recovered signer |
//! | `disable_trusted_register` | owner only | - |
//! | `transfer_ownership` | owner only | - |
//!
//! ## Trust Gate
//!
//! ```text
//! Trusted --(disable_trusted_register, owner)--> Open   (terminal)
//! ```
//!
//! While `Trusted`, a gated entry point only accepts calls whose immediate
//! caller is the trusted forwarder. A second disable fails with `AlreadyOpen`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::LedgerTarget;
    pub use crate::config::{ConfigError, RegistryConfig};
    pub use crate::domain::call_context::CallContext;
    pub use crate::domain::errors::GateError;
    pub use crate::domain::trust_gate::{GatePolicy, TrustGate};
    pub use crate::ports::inbound::IdRegistryApi;
    pub use crate::service::{IdRegistry, InMemoryIdRegistry};
}

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Id Registry";
