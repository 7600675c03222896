//! # Adapters Layer

pub mod nonce_store;

pub use nonce_store::InMemoryNonceStore;
