//! # Inbound Ports (Driving Ports / API)

use crate::domain::eip712::Eip712Domain;
use crate::domain::entities::{EcdsaSignature, RegistrationRequest};
use crate::domain::errors::{GatewayError, SignatureError};
use crate::ports::outbound::RegistrationTarget;
use shared_types::{Address, Hash, IdentityId, U256};

/// Meta-Transaction Gateway API.
pub trait MetaTxGatewayApi {
    /// The EIP-712 domain signatures are bound to.
    fn domain(&self) -> &Eip712Domain;

    /// Cached domain separator for [`Self::domain`].
    fn domain_separator(&self) -> Hash;

    /// Current nonce of `signer`.
    fn nonce_of(&self, signer: &Address) -> U256;

    /// Recover the signer of `request` without touching any state.
    ///
    /// # Errors
    /// Any `SignatureError` from recovery.
    fn recover_signer(
        &self,
        request: &RegistrationRequest,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError>;

    /// Verify `signature`, consume the signer's nonce, and register the
    /// signer with `target`.
    ///
    /// The economic caller plays no part: any submitter may relay a validly
    /// signed request.
    ///
    /// # Errors
    /// * `Signature` - malformed signature or signer differs from `request.to`
    /// * `InvalidNonce` - `request.nonce` is not the signer's current nonce
    /// * `Target` - the target's own failure, unchanged
    ///
    /// No state changes on any error.
    fn submit_signed_registration<T: RegistrationTarget>(
        &mut self,
        target: &mut T,
        request: &RegistrationRequest,
        signature: &[u8],
    ) -> Result<IdentityId, GatewayError>;
}
