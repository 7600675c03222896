//! # Adapters Layer
//!
//! Connects the gateway's `RegistrationTarget` port to the ledger.

pub mod ledger_target;

pub use ledger_target::LedgerTarget;
