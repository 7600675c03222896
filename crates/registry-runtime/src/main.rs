//! # Id Registry Runtime
//!
//! Reads JSON-lines transactions from stdin and writes one JSON receipt per
//! line to stdout. Logs go to stderr; set `RUST_LOG` to adjust verbosity.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber
//! 2. Load configuration from `IR_*` environment variables
//! 3. Validate it (owner, forwarder and verifying contract must be set)
//! 4. Serve stdin until EOF or Ctrl+C

use anyhow::{Context, Result};
use registry_runtime::{load_config, RegistryRuntime};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    config
        .validate()
        .context("invalid registry configuration; set the IR_* environment variables")?;

    info!(
        domain = %config.domain.name,
        version = %config.domain.version,
        chain_id = config.domain.chain_id,
        verifying_contract = %config.domain.verifying_contract,
        "starting id registry runtime"
    );
    let runtime = RegistryRuntime::new(config)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = runtime.run(stdin, stdout) => {
            let executed = result?;
            info!(executed, "input exhausted, shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, shutting down");
        }
    }

    Ok(())
}
