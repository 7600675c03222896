//! # Transaction Executor
//!
//! Applies transactions to one registry, strictly one at a time. The
//! registry sits behind a mutex and every transaction holds it from start
//! to receipt, so events drained after a call belong to that call alone.

use crate::transaction::{Receipt, ReceiptError, Transaction};
use ir_02_meta_tx_gateway::RegistrationRequest;
use ir_03_id_registry::prelude::{ConfigError, IdRegistryApi, InMemoryIdRegistry, RegistryConfig};
use parking_lot::Mutex;
use shared_types::RegistryError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Error code for lines that do not parse as a `Transaction`.
pub const MALFORMED_TRANSACTION: &str = "MalformedTransaction";

/// Serial executor over an in-memory registry.
pub struct RegistryRuntime {
    registry: Mutex<InMemoryIdRegistry>,
}

impl RegistryRuntime {
    /// Create a runtime around a fresh registry.
    ///
    /// # Errors
    /// Whatever `RegistryConfig::validate` rejects.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: Mutex::new(InMemoryIdRegistry::in_memory(config)?),
        })
    }

    /// Apply one transaction and report its outcome.
    pub fn execute(&self, tx: Transaction) -> Receipt {
        let mut registry = self.registry.lock();
        let mut receipt = match apply(&mut registry, tx) {
            Ok(receipt) => receipt,
            Err(err) => {
                debug!(code = err.code(), error = %err, "transaction failed");
                Receipt::failure(ReceiptError::from(&err))
            }
        };
        receipt.events = registry.event_sink().drain();
        receipt
    }

    /// Parse and apply one JSON line.
    pub fn execute_line(&self, line: &str) -> Receipt {
        match serde_json::from_str::<Transaction>(line) {
            Ok(tx) => self.execute(tx),
            Err(err) => {
                warn!(error = %err, "malformed transaction");
                Receipt::failure(ReceiptError {
                    code: MALFORMED_TRANSACTION.to_string(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// Execute every non-blank line of `reader`, writing one receipt line
    /// per transaction to `writer`. Returns the number of transactions.
    ///
    /// # Errors
    /// I/O failures on either stream.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> anyhow::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut executed = 0;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let receipt = self.execute_line(&line);
            let mut out = serde_json::to_vec(&receipt)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
            executed += 1;
        }
        Ok(executed)
    }
}

fn apply(registry: &mut InMemoryIdRegistry, tx: Transaction) -> Result<Receipt, RegistryError> {
    let mut receipt = Receipt::success();
    match tx {
        Transaction::Register { ctx, recovery } => {
            receipt.id = Some(registry.register(&ctx, recovery)?);
        }
        Transaction::SubmitSignedRegistration {
            ctx,
            to,
            recovery,
            nonce,
            signature,
        } => {
            let signature = decode_signature(&signature)?;
            let request = RegistrationRequest::new(to, recovery, nonce);
            receipt.id = Some(registry.submit_signed_registration(&ctx, &request, &signature)?);
        }
        Transaction::DisableTrustedRegister { ctx } => {
            registry.disable_trusted_register(&ctx)?;
        }
        Transaction::TransferOwnership { ctx, new_owner } => {
            registry.transfer_ownership(&ctx, new_owner)?;
        }
        Transaction::IdOf { address } => {
            receipt.id = Some(registry.id_of(&address));
        }
        Transaction::NonceOf { address } => {
            receipt.nonce = Some(registry.nonce_of(&address));
        }
        Transaction::RecoveryOf { address } => {
            receipt.address = registry.recovery_of(&address);
        }
    }
    Ok(receipt)
}

fn decode_signature(text: &str) -> Result<Vec<u8>, RegistryError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|err| RegistryError::InvalidSignature {
        reason: format!("signature is not hex: {err}"),
    })
}
