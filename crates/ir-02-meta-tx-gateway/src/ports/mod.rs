//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that relayers and the registry call
//! - **Outbound (Driven)**: Nonce storage and the registration target

pub mod inbound;
pub mod outbound;
