//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the signing engine.

use crate::domain::envelope::Envelope;
use crate::domain::signing::VerificationResult;
use crate::service::ServiceError;

/// Primary signing API.
pub trait MessageSigningApi {
    /// Sign a message with the persisted key and wrap it in an envelope.
    ///
    /// The key is generated and persisted on first use.
    ///
    /// # Errors
    /// * `ServiceError::Signing` - message too long, entropy or encoding failure
    /// * `ServiceError::KeyStore` - key could not be loaded or persisted
    fn sign_message(&self, message: &str) -> Result<Envelope, ServiceError>;

    /// Verify an envelope against its embedded public key.
    ///
    /// Never fails: malformed input yields an invalid result.
    fn verify_envelope(&self, envelope: &Envelope) -> VerificationResult;

    /// Encoded public key of the persisted signing key.
    fn public_key(&self) -> Result<String, ServiceError>;
}
