//! Cross-subsystem flows.

pub mod fixtures;
pub mod registry_flows;
pub mod runtime_flows;
