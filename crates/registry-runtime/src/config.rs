//! # Runtime Configuration
//!
//! Builds a `RegistryConfig` from defaults and `IR_*` environment variables.
//! Unparseable values are logged and ignored; `RegistryConfig::validate`
//! catches anything left unset.

use ir_03_id_registry::config::RegistryConfig;
use shared_types::Address;
use tracing::{info, warn};

/// EIP-712 domain name.
pub const ENV_DOMAIN_NAME: &str = "IR_DOMAIN_NAME";
/// EIP-712 domain version.
pub const ENV_DOMAIN_VERSION: &str = "IR_DOMAIN_VERSION";
/// Chain id.
pub const ENV_CHAIN_ID: &str = "IR_CHAIN_ID";
/// Registry address used as the verifying contract.
pub const ENV_VERIFYING_CONTRACT: &str = "IR_VERIFYING_CONTRACT";
/// Initial owner.
pub const ENV_OWNER: &str = "IR_OWNER";
/// Trusted forwarder.
pub const ENV_TRUSTED_FORWARDER: &str = "IR_TRUSTED_FORWARDER";
/// Gate direct registration (`true`/`false`).
pub const ENV_GATE_DIRECT: &str = "IR_GATE_DIRECT";
/// Gate relayed registration (`true`/`false`).
pub const ENV_GATE_RELAYED: &str = "IR_GATE_RELAYED";

/// Load configuration from the process environment.
pub fn load_config() -> RegistryConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> RegistryConfig {
    let mut config = RegistryConfig::default();

    if let Some(name) = lookup(ENV_DOMAIN_NAME) {
        config.domain.name = name;
    }
    if let Some(version) = lookup(ENV_DOMAIN_VERSION) {
        config.domain.version = version;
    }
    if let Some(chain_id) = lookup(ENV_CHAIN_ID) {
        match chain_id.parse() {
            Ok(id) => config.domain.chain_id = id,
            Err(_) => warn!("{ENV_CHAIN_ID} must be an unsigned integer, got {chain_id:?}"),
        }
    }

    load_address(&lookup, ENV_VERIFYING_CONTRACT, &mut config.domain.verifying_contract);
    load_address(&lookup, ENV_OWNER, &mut config.owner);
    load_address(&lookup, ENV_TRUSTED_FORWARDER, &mut config.trusted_forwarder);

    load_flag(&lookup, ENV_GATE_DIRECT, &mut config.gates.gate_direct);
    load_flag(&lookup, ENV_GATE_RELAYED, &mut config.gates.gate_relayed);

    config
}

fn load_address(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut Address) {
    let Some(text) = lookup(key) else { return };
    match text.parse::<Address>() {
        Ok(address) => {
            *slot = address;
            info!("Loaded {key} from environment");
        }
        Err(err) => warn!("{key} is not a valid address: {err}"),
    }
}

fn load_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut bool) {
    let Some(text) = lookup(key) else { return };
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => *slot = true,
        "0" | "false" | "no" | "off" => *slot = false,
        _ => warn!("{key} must be true or false, got {text:?}"),
    }
}
