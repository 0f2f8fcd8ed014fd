//! # Envelope
//!
//! The externally visible record binding a message to its signature and the
//! public key that produced it:
//!
//! ```json
//! {"message":"hello-world","signature":"MGUCMQ...","pubkey":"-----BEGIN ECDSA PUBLIC KEY-----\n..."}
//! ```
//!
//! The embedded key is not authenticated against any identity; it only
//! proves that the holder of that key signed this message.

use serde::{Deserialize, Serialize};

use super::codec::WireFormat;
use super::errors::EnvelopeError;
use super::signing::{verify, VerificationResult};

/// Signed message record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// The signed message text
    pub message: String,
    /// Base64 signature text
    pub signature: String,
    /// PEM public key text
    pub pubkey: String,
}

impl Envelope {
    /// Compose an envelope from its three text fields.
    pub fn build(
        message: impl Into<String>,
        signature: impl Into<String>,
        pubkey: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            signature: signature.into(),
            pubkey: pubkey.into(),
        }
    }

    /// Parse an envelope from JSON bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        serde_json::from_slice(bytes).map_err(|e| EnvelopeError::Malformed(e.to_string()))
    }

    /// Serialize as a single line of compact JSON.
    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string(self).map_err(|e| EnvelopeError::Serialize(e.to_string()))
    }

    /// Verify the envelope against its own embedded public key.
    pub fn verify(&self, format: WireFormat) -> VerificationResult {
        verify(&self.message, &self.signature, &self.pubkey, format)
    }
}
