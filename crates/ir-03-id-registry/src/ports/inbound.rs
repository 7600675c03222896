//! # Inbound Ports (Driving Ports / API)
//!
//! The registry's external interface. Every mutating call takes `&mut self`
//! and runs to completion or fails without observable change.

use crate::domain::call_context::CallContext;
use crate::domain::trust_gate::TrustGate;
use ir_02_meta_tx_gateway::RegistrationRequest;
use shared_types::{Address, Hash, IdentityId, RegistryError, U256};

/// Id Registry API.
pub trait IdRegistryApi {
    /// Register the call's effective sender.
    ///
    /// # Errors
    /// * `Unauthorized` - direct gating is on, the gate is `Trusted`, and the
    ///   caller is not the trusted forwarder
    /// * `AlreadyRegistered` - the sender already holds an id
    fn register(&mut self, ctx: &CallContext, recovery: Address) -> Result<IdentityId, RegistryError>;

    /// Register `request.to` on the strength of its EIP-712 signature.
    ///
    /// # Errors
    /// * `Unauthorized` - relayed gating is on, the gate is `Trusted`, and the
    ///   submitter is not the trusted forwarder
    /// * `InvalidSignature` - malformed, or signed by someone other than `request.to`
    /// * `InvalidNonce` - not the signer's current nonce
    /// * `AlreadyRegistered` - the signer already holds an id
    fn submit_signed_registration(
        &mut self,
        ctx: &CallContext,
        request: &RegistrationRequest,
        signature: &[u8],
    ) -> Result<IdentityId, RegistryError>;

    /// Open the trust gate. Owner only, exactly once.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `AlreadyOpen` - the gate is already open
    fn disable_trusted_register(&mut self, ctx: &CallContext) -> Result<(), RegistryError>;

    /// Hand the owner role to `new_owner`.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `ZeroAddress` - `new_owner` is zero
    fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), RegistryError>;

    /// Identifier of `address`, or zero.
    fn id_of(&self, address: &Address) -> IdentityId;

    /// Same lookup as [`Self::id_of`].
    fn custody_address_to_id(&self, address: &Address) -> IdentityId {
        self.id_of(address)
    }

    /// Recovery address recorded for `address`.
    fn recovery_of(&self, address: &Address) -> Option<Address>;

    /// Current meta-transaction nonce of `signer`.
    fn nonce_of(&self, signer: &Address) -> U256;

    /// Current owner.
    fn owner(&self) -> Address;

    /// The trusted forwarder fixed at construction.
    fn trusted_forwarder(&self) -> Address;

    /// Returns true if `address` is the trusted forwarder.
    fn is_trusted_forwarder(&self, address: &Address) -> bool {
        *address == self.trusted_forwarder()
    }

    /// Current trust gate state.
    fn gate_state(&self) -> TrustGate;

    /// EIP-712 domain separator signatures must be bound to.
    fn domain_separator(&self) -> Hash;
}
