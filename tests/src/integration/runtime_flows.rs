//! # Runtime Flows
//!
//! Drives `registry-runtime` through its JSON-lines interface the way the
//! binary does, checking receipts rather than registry internals.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{addr, config, Signer, OWNER, RELAYER};
    use registry_runtime::{load_config_from, Receipt, RegistryRuntime, Transaction};
    use ir_03_id_registry::prelude::CallContext;
    use serde_json::json;
    use shared_types::{IdentityId, RegistryEvent, U256};

    fn runtime() -> RegistryRuntime {
        RegistryRuntime::new(config()).unwrap()
    }

    fn signed_line(signer: &Signer, nonce: u64) -> String {
        let request = signer.request(addr(0xEE), nonce);
        json!({
            "op": "submit_signed_registration",
            "ctx": { "caller": RELAYER },
            "to": signer.address,
            "recovery": request.recovery,
            "nonce": request.nonce,
            "signature": format!("0x{}", hex::encode(signer.sign(&request))),
        })
        .to_string()
    }

    async fn run(runtime: &RegistryRuntime, lines: &[String]) -> Vec<Receipt> {
        let input = lines.join("\n");
        let mut output = Vec::new();
        runtime
            .run(tokio::io::BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_relayed_session_over_json_lines() {
        let runtime = runtime();
        let alice = Signer::random();
        let lines = vec![
            signed_line(&alice, 0),
            json!({ "op": "disable_trusted_register", "ctx": { "caller": OWNER } }).to_string(),
            signed_line(&alice, 0),
            signed_line(&alice, 0),
            json!({ "op": "nonce_of", "address": alice.address }).to_string(),
            json!({ "op": "id_of", "address": alice.address }).to_string(),
        ];

        let receipts = run(&runtime, &lines).await;
        assert_eq!(receipts.len(), 6);

        assert_eq!(receipts[0].error_code(), Some("Unauthorized"));
        assert!(receipts[1].is_success());
        assert_eq!(receipts[2].id, Some(IdentityId::from(1)));
        assert_eq!(
            receipts[2].events,
            vec![RegistryEvent::Register {
                to: alice.address,
                id: IdentityId::from(1),
                recovery: addr(0xEE),
            }]
        );
        assert_eq!(receipts[3].error_code(), Some("InvalidNonce"));
        assert_eq!(receipts[4].nonce, Some(U256::one()));
        assert_eq!(receipts[5].id, Some(IdentityId::from(1)));
    }

    #[tokio::test]
    async fn test_ownership_handover() {
        let runtime = runtime();
        let next_owner = addr(0x0F);
        let lines = vec![
            serde_json::to_string(&Transaction::TransferOwnership {
                ctx: CallContext::direct(OWNER),
                new_owner: next_owner,
            })
            .unwrap(),
            serde_json::to_string(&Transaction::DisableTrustedRegister {
                ctx: CallContext::direct(OWNER),
            })
            .unwrap(),
            serde_json::to_string(&Transaction::DisableTrustedRegister {
                ctx: CallContext::direct(next_owner),
            })
            .unwrap(),
        ];

        let receipts = run(&runtime, &lines).await;
        assert_eq!(
            receipts[0].events,
            vec![RegistryEvent::OwnershipTransferred {
                previous: OWNER,
                new: next_owner,
            }]
        );
        assert_eq!(receipts[1].error_code(), Some("Unauthorized"));
        assert!(receipts[2].is_success());
    }

    #[test]
    fn test_unconfigured_runtime_refused() {
        assert!(RegistryRuntime::new(load_config_from(|_| None)).is_err());
    }
}
