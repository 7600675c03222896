//! # Id-Registry Test Suite
//!
//! Unified test crate for flows that cross subsystem boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs        # Keys, addresses, configured registries
//!     ├── registry_flows.rs  # Ledger + gateway + gate through IdRegistry
//!     └── runtime_flows.rs   # JSON-lines executor end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ir-tests
//! cargo test -p ir-tests integration::registry_flows::
//!
//! # Benchmarks
//! cargo bench -p ir-tests
//! ```

pub mod integration;
