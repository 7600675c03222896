//! # Meta-Transaction Gateway Service
//!
//! Application service implementing `MetaTxGatewayApi`.
//!
//! ## Submission Flow
//!
//! 1. Parse the 65-byte signature
//! 2. Recover the signer over the EIP-712 digest (cached domain separator)
//! 3. Require signer == `request.to`
//! 4. Require `request.nonce` == stored nonce, then store nonce + 1
//! 5. Deliver `(signer, recovery)` to the registration target
//!
//! If step 5 fails the nonce is put back, so a failed submission leaves no
//! trace.

use crate::domain::ecdsa::recover_address;
use crate::domain::eip712::{digest_with_separator, Eip712Domain};
use crate::domain::entities::{EcdsaSignature, RegistrationRequest};
use crate::domain::errors::{GatewayError, SignatureError};
use crate::domain::nonces;
use crate::ports::inbound::MetaTxGatewayApi;
use crate::ports::outbound::{NonceStore, RegistrationTarget};
use shared_types::{Address, Hash, IdentityId, U256};
use tracing::{debug, info, instrument, warn};

/// Meta-Transaction Gateway Service.
pub struct MetaTxGatewayService<N: NonceStore> {
    domain: Eip712Domain,
    separator: Hash,
    nonces: N,
}

impl<N: NonceStore> MetaTxGatewayService<N> {
    /// Create a gateway bound to `domain`.
    pub fn new(domain: Eip712Domain, nonces: N) -> Self {
        let separator = domain.separator();
        debug!(
            name = %domain.name,
            version = %domain.version,
            chain_id = domain.chain_id,
            verifying_contract = %domain.verifying_contract,
            separator = %hex::encode(separator),
            "EIP-712 domain initialized"
        );
        Self {
            domain,
            separator,
            nonces,
        }
    }
}

impl<N: NonceStore> MetaTxGatewayApi for MetaTxGatewayService<N> {
    fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    fn domain_separator(&self) -> Hash {
        self.separator
    }

    fn nonce_of(&self, signer: &Address) -> U256 {
        self.nonces.nonce_of(signer)
    }

    fn recover_signer(
        &self,
        request: &RegistrationRequest,
        signature: &EcdsaSignature,
    ) -> Result<Address, SignatureError> {
        recover_address(&digest_with_separator(&self.separator, request), signature)
    }

    #[instrument(skip_all, fields(to = %request.to, nonce = %request.nonce))]
    fn submit_signed_registration<T: RegistrationTarget>(
        &mut self,
        target: &mut T,
        request: &RegistrationRequest,
        signature: &[u8],
    ) -> Result<IdentityId, GatewayError> {
        let signature = EcdsaSignature::from_bytes(signature)?;
        let signer = self.recover_signer(request, &signature).map_err(|err| {
            warn!(error = %err, "signature recovery failed");
            err
        })?;

        if signer != request.to {
            warn!(recovered = %signer, "signer does not match subject");
            return Err(SignatureError::SignerMismatch {
                expected: request.to,
                actual: signer,
            }
            .into());
        }

        let current = self.nonces.nonce_of(&signer);
        let next = nonces::advance(signer, current, request.nonce).map_err(|err| {
            warn!(expected = %current, "nonce mismatch");
            err
        })?;

        // Consumed before delegating: a re-entrant submission of the same
        // request sees the advanced nonce.
        self.nonces.set_nonce(signer, next);

        match target.register(signer, request.recovery) {
            Ok(id) => {
                info!(%id, %signer, "signed registration accepted");
                Ok(id)
            }
            Err(err) => {
                self.nonces.set_nonce(signer, current);
                warn!(error = %err, "registration target rejected request");
                Err(GatewayError::Target(err))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
