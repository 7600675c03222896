//! # Domain Layer

pub mod call_context;
pub mod errors;
pub mod trust_gate;
