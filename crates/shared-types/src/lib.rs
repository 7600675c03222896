//! # Shared Types Crate
//!
//! This crate contains the primitives, events and error taxonomy used by
//! every registry subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Zero Sentinel**: `IdentityId::NONE` (0) means "unregistered"; issued
//!   identifiers start at 1.
//! - **Unified Failures**: Each subsystem keeps its own detailed error enum
//!   and converts into [`RegistryError`] at the registry boundary.

pub mod entities;
pub mod errors;
pub mod events;

pub use entities::*;
pub use errors::*;
pub use events::*;
