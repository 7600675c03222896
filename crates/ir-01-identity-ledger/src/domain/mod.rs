//! # Domain Layer
//!
//! Pure ledger logic with no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod invariants;
