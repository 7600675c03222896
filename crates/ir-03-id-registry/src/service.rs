//! # Id Registry Service
//!
//! Composes the Identity Ledger and the Meta-Transaction Gateway behind the
//! trust gate and owner checks.
//!
//! Both registration paths end in the same ledger `register`, so id
//! assignment and the one-id-per-address rule cannot diverge between them.

use crate::adapters::LedgerTarget;
use crate::config::{ConfigError, RegistryConfig};
use crate::domain::call_context::CallContext;
use crate::domain::errors::GateError;
use crate::domain::trust_gate::{GatePolicy, TrustGate};
use crate::ports::inbound::IdRegistryApi;
use ir_01_identity_ledger::prelude::{
    EventSink, IdentityLedgerApi, IdentityLedgerService, InMemoryEventLog, InMemoryLedgerStore,
    LedgerStore,
};
use ir_02_meta_tx_gateway::{
    Eip712Domain, InMemoryNonceStore, MetaTxGatewayApi, MetaTxGatewayService, NonceStore,
    RegistrationRequest,
};
use shared_types::{Address, Hash, IdentityId, RegistryError, RegistryEvent, U256};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The registry over in-memory adapters.
pub type InMemoryIdRegistry =
    IdRegistry<InMemoryLedgerStore, InMemoryNonceStore, Arc<InMemoryEventLog>>;

/// The Id Registry.
pub struct IdRegistry<S: LedgerStore, N: NonceStore, E: EventSink + Clone> {
    ledger: IdentityLedgerService<S, E>,
    gateway: MetaTxGatewayService<N>,
    events: E,
    gate: TrustGate,
    policy: GatePolicy,
    owner: Address,
    trusted_forwarder: Address,
}

impl<S: LedgerStore, N: NonceStore, E: EventSink + Clone> IdRegistry<S, N, E> {
    /// Build a registry over the given adapters. The gate starts `Trusted`.
    ///
    /// # Errors
    /// Whatever `RegistryConfig::validate` rejects.
    pub fn new(config: RegistryConfig, store: S, nonces: N, events: E) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            owner = %config.owner,
            trusted_forwarder = %config.trusted_forwarder,
            gate_direct = config.gates.gate_direct,
            gate_relayed = config.gates.gate_relayed,
            "id registry initialized"
        );
        Ok(Self {
            ledger: IdentityLedgerService::new(store, events.clone()),
            gateway: MetaTxGatewayService::new(config.domain, nonces),
            events,
            gate: TrustGate::Trusted,
            policy: config.gates,
            owner: config.owner,
            trusted_forwarder: config.trusted_forwarder,
        })
    }

    /// The event sink shared with the ledger.
    pub fn event_sink(&self) -> &E {
        &self.events
    }

    /// Which entry points the gate governs.
    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// EIP-712 domain signatures are bound to.
    pub fn domain(&self) -> &Eip712Domain {
        self.gateway.domain()
    }

    /// Number of issued identities.
    pub fn registered_count(&self) -> usize {
        self.ledger.registered_count()
    }

    /// The identifier the next registration will receive.
    pub fn next_id(&self) -> IdentityId {
        self.ledger.next_id()
    }

    fn require_owner(&self, caller: Address) -> Result<(), GateError> {
        if caller != self.owner {
            warn!(%caller, owner = %self.owner, "owner check failed");
            return Err(GateError::Unauthorized {
                caller,
                reason: "caller is not the owner",
            });
        }
        Ok(())
    }
}

impl InMemoryIdRegistry {
    /// Registry over fresh in-memory adapters.
    ///
    /// # Errors
    /// Whatever `RegistryConfig::validate` rejects.
    pub fn in_memory(config: RegistryConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            InMemoryLedgerStore::new(),
            InMemoryNonceStore::new(),
            Arc::new(InMemoryEventLog::new()),
        )
    }
}

impl<S: LedgerStore, N: NonceStore, E: EventSink + Clone> IdRegistryApi for IdRegistry<S, N, E> {
    #[instrument(skip_all, fields(caller = %ctx.caller))]
    fn register(&mut self, ctx: &CallContext, recovery: Address) -> Result<IdentityId, RegistryError> {
        self.gate
            .admit(self.policy.gate_direct, ctx.caller, self.trusted_forwarder)?;
        let subject = ctx.effective_sender(self.trusted_forwarder);
        Ok(self.ledger.register(subject, recovery)?)
    }

    #[instrument(skip_all, fields(caller = %ctx.caller, to = %request.to))]
    fn submit_signed_registration(
        &mut self,
        ctx: &CallContext,
        request: &RegistrationRequest,
        signature: &[u8],
    ) -> Result<IdentityId, RegistryError> {
        self.gate
            .admit(self.policy.gate_relayed, ctx.caller, self.trusted_forwarder)?;
        let mut target = LedgerTarget(&mut self.ledger);
        Ok(self
            .gateway
            .submit_signed_registration(&mut target, request, signature)?)
    }

    #[instrument(skip_all, fields(caller = %ctx.caller))]
    fn disable_trusted_register(&mut self, ctx: &CallContext) -> Result<(), RegistryError> {
        self.require_owner(ctx.caller)?;
        self.gate.disable()?;

        info!("trusted registration disabled");
        self.events
            .publish(RegistryEvent::TrustedRegisterDisabled { by: ctx.caller });
        Ok(())
    }

    #[instrument(skip_all, fields(caller = %ctx.caller, new_owner = %new_owner))]
    fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), RegistryError> {
        self.require_owner(ctx.caller)?;
        if new_owner.is_zero() {
            return Err(RegistryError::ZeroAddress { field: "new_owner" });
        }

        let previous = std::mem::replace(&mut self.owner, new_owner);
        info!(%previous, "ownership transferred");
        self.events.publish(RegistryEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        Ok(())
    }

    fn id_of(&self, address: &Address) -> IdentityId {
        self.ledger.id_of(address)
    }

    fn recovery_of(&self, address: &Address) -> Option<Address> {
        self.ledger.recovery_of(address)
    }

    fn nonce_of(&self, signer: &Address) -> U256 {
        self.gateway.nonce_of(signer)
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn trusted_forwarder(&self) -> Address {
        self.trusted_forwarder
    }

    fn gate_state(&self) -> TrustGate {
        self.gate
    }

    fn domain_separator(&self) -> Hash {
        self.gateway.domain_separator()
    }
}

// =============================================================================
// TESTS
// =============================================================================
