//! # Registry Flows
//!
//! Direct and relayed registration through `IdRegistry`, exercising the
//! ledger, the gateway and the trust gate together.
//!
//! ## Properties Covered
//!
//! 1. The Nth direct registration receives id N
//! 2. Double registration fails and leaves the first record intact
//! 3. A signed request is accepted at most once
//! 4. A signature by A cannot register B
//! 5. Relay through a non-trusted address fails until the gate is opened
//! 6. Both paths share one id sequence

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{addr, config_with, registry, Signer, FORWARDER, OWNER, RELAYER};
    use ir_03_id_registry::prelude::{CallContext, GatePolicy, IdRegistryApi, InMemoryIdRegistry, TrustGate};
    use shared_types::{Address, IdentityId, RegistryError, RegistryEvent, U256};

    // =============================================================================
    // DIRECT REGISTRATION
    // =============================================================================

    #[test]
    fn test_xyz_receive_one_two_three_then_x_rejected() {
        let mut registry = registry();
        let (x, y, z) = (addr(0x0A), addr(0x0B), addr(0x0C));

        for (n, subject) in [x, y, z].into_iter().enumerate() {
            let id = registry.register(&CallContext::direct(subject), addr(0xEE)).unwrap();
            assert_eq!(id, IdentityId::from(n as u64 + 1));
        }

        let err = registry.register(&CallContext::direct(x), addr(0xDD)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                address: x,
                id: IdentityId::from(1)
            }
        );

        assert_eq!(registry.id_of(&x), IdentityId::from(1));
        assert_eq!(registry.id_of(&y), IdentityId::from(2));
        assert_eq!(registry.id_of(&z), IdentityId::from(3));
        assert_eq!(registry.recovery_of(&x), Some(addr(0xEE)));
        assert_eq!(registry.next_id(), IdentityId::from(4));
    }

    #[test]
    fn test_nth_registration_receives_n() {
        let mut registry = registry();
        for n in 1..=100u8 {
            let subject = Address::new([n; 20]);
            let id = registry.register(&CallContext::direct(subject), Address::ZERO).unwrap();
            assert_eq!(id, IdentityId::from(u64::from(n)));
            assert_eq!(registry.custody_address_to_id(&subject), id);
        }
        assert_eq!(registry.registered_count(), 100);
    }

    #[test]
    fn test_unregistered_address_reads_zero() {
        let registry = registry();
        assert_eq!(registry.id_of(&addr(0x42)), IdentityId::NONE);
        assert_eq!(registry.nonce_of(&addr(0x42)), U256::zero());
    }

    // =============================================================================
    // RELAYED REGISTRATION
    // =============================================================================

    #[test]
    fn test_signed_request_then_replay() {
        let mut registry = registry();
        let alice = Signer::random();
        let request = alice.request(addr(0xEE), 0);
        let signature = alice.sign(&request);

        let id = registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &request, &signature)
            .unwrap();
        assert_eq!(id, IdentityId::from(1));
        assert_eq!(registry.id_of(&alice.address), id);
        assert_eq!(registry.nonce_of(&alice.address), U256::one());

        let err = registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &request, &signature)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidNonce {
                signer: alice.address,
                expected: U256::one(),
                provided: U256::zero(),
            }
        );
        assert_eq!(registry.registered_count(), 1);
    }

    #[test]
    fn test_signature_from_a_cannot_register_b() {
        let mut registry = registry();
        let alice = Signer::random();
        let bob = Signer::random();
        let request = bob.request(Address::ZERO, 0);

        let err = registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &request, &alice.sign(&request))
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidSignature { .. }));
        assert_eq!(registry.id_of(&bob.address), IdentityId::NONE);
        assert_eq!(registry.id_of(&alice.address), IdentityId::NONE);
        assert_eq!(registry.nonce_of(&bob.address), U256::zero());
    }

    #[test]
    fn test_untrusted_relay_rejected_until_gate_opens() {
        let mut registry = registry();
        let alice = Signer::random();
        let request = alice.request(Address::ZERO, 0);
        let signature = alice.sign(&request);

        let err = registry
            .submit_signed_registration(&CallContext::direct(RELAYER), &request, &signature)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { caller, .. } if caller == RELAYER));

        registry.disable_trusted_register(&CallContext::direct(OWNER)).unwrap();
        assert_eq!(registry.gate_state(), TrustGate::Open);

        let id = registry
            .submit_signed_registration(&CallContext::direct(RELAYER), &request, &signature)
            .unwrap();
        assert_eq!(registry.id_of(&alice.address), id);
    }

    #[test]
    fn test_pending_request_invalidated_by_consumed_nonce() {
        let mut registry = registry();
        let alice = Signer::random();
        let first = alice.request(addr(0x01), 0);
        let second = alice.request(addr(0x02), 0);
        let second_signature = alice.sign(&second);

        registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &first, &alice.sign(&first))
            .unwrap();
        let err = registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &second, &second_signature)
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidNonce { .. }));
        assert_eq!(registry.recovery_of(&alice.address), Some(addr(0x01)));
    }

    #[test]
    fn test_paths_share_one_sequence_and_uniqueness() {
        let mut registry = registry();
        let alice = Signer::random();
        let bob = addr(0x0B);

        registry.register(&CallContext::direct(bob), Address::ZERO).unwrap();
        let request = alice.request(Address::ZERO, 0);
        let id = registry
            .submit_signed_registration(&CallContext::direct(FORWARDER), &request, &alice.sign(&request))
            .unwrap();
        assert_eq!(id, IdentityId::from(2));

        // Alice is registered now; the direct path refuses her too
        let err = registry
            .register(&CallContext::direct(alice.address), Address::ZERO)
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_events_follow_commits() {
        let mut registry = registry();
        let alice = Signer::random();
        let request = alice.request(addr(0xEE), 0);
        let signature = alice.sign(&request);

        registry.register(&CallContext::direct(addr(0x0A)), Address::ZERO).unwrap();
        let _ = registry.submit_signed_registration(&CallContext::direct(RELAYER), &request, &signature);
        registry.disable_trusted_register(&CallContext::direct(OWNER)).unwrap();
        registry
            .submit_signed_registration(&CallContext::direct(RELAYER), &request, &signature)
            .unwrap();

        assert_eq!(
            registry.event_sink().events(),
            vec![
                RegistryEvent::Register {
                    to: addr(0x0A),
                    id: IdentityId::from(1),
                    recovery: Address::ZERO,
                },
                RegistryEvent::TrustedRegisterDisabled { by: OWNER },
                RegistryEvent::Register {
                    to: alice.address,
                    id: IdentityId::from(2),
                    recovery: addr(0xEE),
                },
            ]
        );
    }

    // =============================================================================
    // GATE POLICY
    // =============================================================================

    #[test]
    fn test_gated_direct_path_accepts_forwarded_sender() {
        let mut registry = InMemoryIdRegistry::in_memory(config_with(GatePolicy {
            gate_direct: true,
            gate_relayed: false,
        }))
        .unwrap();
        let alice = Signer::random();
        let x = addr(0x0A);

        assert!(matches!(
            registry.register(&CallContext::direct(x), Address::ZERO),
            Err(RegistryError::Unauthorized { .. })
        ));
        // Spoofed forwarding from an untrusted caller is still gated
        assert!(matches!(
            registry.register(&CallContext::forwarded(RELAYER, x), Address::ZERO),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert_eq!(
            registry.register(&CallContext::forwarded(FORWARDER, x), Address::ZERO),
            Ok(IdentityId::from(1))
        );

        // Relayed path is ungated under this policy
        let request = alice.request(Address::ZERO, 0);
        assert!(registry
            .submit_signed_registration(&CallContext::direct(RELAYER), &request, &alice.sign(&request))
            .is_ok());
    }

    #[test]
    fn test_disable_twice_and_by_stranger() {
        let mut registry = registry();
        assert!(matches!(
            registry.disable_trusted_register(&CallContext::direct(RELAYER)),
            Err(RegistryError::Unauthorized { .. })
        ));
        registry.disable_trusted_register(&CallContext::direct(OWNER)).unwrap();
        assert_eq!(
            registry.disable_trusted_register(&CallContext::direct(OWNER)),
            Err(RegistryError::AlreadyOpen)
        );
    }
}
