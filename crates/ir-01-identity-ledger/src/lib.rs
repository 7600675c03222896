//! # IR-01 Identity Ledger
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Owns the persistent mapping from custody address to identifier and the
//! monotonic counter that issues new identifiers. Pure state machine, no
//! cryptography.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | One id per custody address | `domain/invariants.rs` - `check_unregistered_invariant()` |
//! | INVARIANT-2 | Nth registration receives id N | `domain/invariants.rs` - `check_density_invariant()` |
//! | INVARIANT-3 | No state change on failure | `service.rs` - all checks precede the commit |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `LedgerStore` | Persist records and the id counter |
//! | `EventSink` | Publish `RegistryEvent::Register` after commit |
//!
//! ## Usage Example
//!
//! ```ignore
//! use ir_01_identity_ledger::prelude::*;
//!
//! let mut ledger = IdentityLedgerService::new(InMemoryLedgerStore::new(), events);
//! let id = ledger.register(alice, alice_recovery)?;
//! assert_eq!(ledger.id_of(&alice), id);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{InMemoryEventLog, InMemoryLedgerStore};
    pub use crate::domain::entities::IdentityRecord;
    pub use crate::domain::errors::LedgerError;
    pub use crate::domain::invariants::{check_density_invariant, check_unregistered_invariant};
    pub use crate::ports::inbound::IdentityLedgerApi;
    pub use crate::ports::outbound::{EventSink, LedgerStore};
    pub use crate::service::IdentityLedgerService;
}

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Identity Ledger";
