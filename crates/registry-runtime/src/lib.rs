//! # Registry Runtime Library
//!
//! Hosts a single in-memory Id Registry and applies transactions to it one
//! at a time. The `main.rs` binary feeds it JSON lines from stdin.
//!
//! - `config` - `IR_*` environment overrides on top of `RegistryConfig::default()`
//! - `transaction` - wire types for requests and receipts
//! - `executor` - serial execution against the registry

#![warn(missing_docs)]

pub mod config;
pub mod executor;
pub mod transaction;

pub use config::{load_config, load_config_from};
pub use executor::RegistryRuntime;
pub use transaction::{Receipt, ReceiptError, ReceiptStatus, Transaction};
