//! # Id-Registry Benchmarks
//!
//! | Path | Dominant cost |
//! |------|---------------|
//! | Direct `register` | map lookup + insert |
//! | `submit_signed_registration` | secp256k1 public key recovery |
//! | Domain separator | five keccak256 words |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ir_02_meta_tx_gateway::{
    address_from_signing_key, recover_signer, sign_registration, Eip712Domain, RegistrationRequest,
};
use ir_03_id_registry::prelude::{CallContext, GatePolicy, IdRegistryApi, InMemoryIdRegistry, RegistryConfig};
use k256::ecdsa::SigningKey;
use shared_types::{Address, U256};
use std::time::Duration;

const FORWARDER: Address = Address::new([0xF0; 20]);

fn domain() -> Eip712Domain {
    Eip712Domain::new("IdRegistry", "1", 1, Address::new([0xC0; 20]))
}

fn registry() -> InMemoryIdRegistry {
    let config = RegistryConfig {
        domain: domain(),
        owner: Address::new([0x0E; 20]),
        trusted_forwarder: FORWARDER,
        gates: GatePolicy::default(),
    };
    InMemoryIdRegistry::in_memory(config).unwrap()
}

fn subject(n: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&n.to_be_bytes());
    Address::new(bytes)
}

fn bench_direct_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("ir-01-direct-registration");

    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("register_batch", size), &size, |b, &size| {
            b.iter(|| {
                let mut registry = registry();
                for n in 1..=size {
                    black_box(
                        registry
                            .register(&CallContext::direct(subject(n)), Address::ZERO)
                            .unwrap(),
                    );
                }
            })
        });
    }

    group.finish();
}

fn bench_signed_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("ir-02-signed-registration");
    group.measurement_time(Duration::from_secs(10));

    let key = SigningKey::random(&mut rand::thread_rng());
    let signer = address_from_signing_key(&key);
    let request = RegistrationRequest::new(signer, Address::ZERO, U256::zero());
    let signature = sign_registration(&key, &domain(), &request).unwrap();
    let bytes = signature.to_bytes();

    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(recover_signer(&domain(), &request, &signature).unwrap()))
    });

    group.bench_function("submit_signed_registration", |b| {
        b.iter_batched(
            registry,
            |mut registry| {
                black_box(
                    registry
                        .submit_signed_registration(&CallContext::direct(FORWARDER), &request, &bytes)
                        .unwrap(),
                )
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("domain_separator", |b| {
        let domain = domain();
        b.iter(|| black_box(domain.separator()))
    });

    group.finish();
}

criterion_group!(benches, bench_direct_registration, bench_signed_registration);
criterion_main!(benches);
