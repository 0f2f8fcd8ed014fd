//! # Hash-then-Sign Pipeline
//!
//! ```text
//! message ──(≤ 250 bytes)──→ SHA-256 ──→ ECDSA P-384 (hedged nonce) ──→ encode
//! ```
//!
//! Verification runs the same pipeline backwards and reports a definite
//! outcome through `VerificationResult`.
//!
//! ## Security Notes
//!
//! - Every signature mixes fresh OS entropy into the RFC 6979 nonce, so two
//!   signatures over the same message differ
//! - The 32-byte digest is used as the ECDSA prehash directly; it is shorter
//!   than the 48-byte field and is left-padded as an integer

use p384::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use p384::ecdsa::Signature;
use rand::rngs::OsRng;
use tracing::{debug, warn};

use super::codec::{decode_public_key, decode_signature, encode_signature, WireFormat};
use super::errors::{SignatureError, SigningError};
use super::hashing::hash_message;
use super::keys::KeyPair;

/// Maximum accepted message length in bytes (inclusive).
pub const MAX_MESSAGE_LEN: usize = 250;

/// Result of signature verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the signature is valid
    pub valid: bool,
    /// Error details (if verification failed)
    pub error: Option<SignatureError>,
}

impl VerificationResult {
    /// Create a successful verification result.
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Create a failed verification result.
    pub fn invalid(error: SignatureError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    /// Whether the signature is valid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

fn check_length(message: &str) -> Result<(), (usize, usize)> {
    if message.len() > MAX_MESSAGE_LEN {
        Err((message.len(), MAX_MESSAGE_LEN))
    } else {
        Ok(())
    }
}

/// Sign a message and return the encoded signature text.
///
/// # Errors
/// * `SigningError::MessageTooLong` - message exceeds `MAX_MESSAGE_LEN` bytes
/// * `SigningError::Encoding` - the signer rejected the digest
pub fn sign(message: &str, key: &KeyPair, format: WireFormat) -> Result<String, SigningError> {
    check_length(message).map_err(|(len, max)| SigningError::MessageTooLong { len, max })?;

    let digest = hash_message(message.as_bytes());
    let signature: Signature = key
        .signing_key()
        .sign_prehash_with_rng(&mut OsRng, digest.as_bytes())
        .map_err(|e| SigningError::Encoding(e.to_string()))?;

    debug!(len = message.len(), %format, "Signed message");
    Ok(encode_signature(&signature, format))
}

/// Verify encoded signature text against a message and encoded public key.
pub fn verify(
    message: &str,
    signature: &str,
    pubkey: &str,
    format: WireFormat,
) -> VerificationResult {
    if let Err((len, max)) = check_length(message) {
        return VerificationResult::invalid(SignatureError::MessageTooLong { len, max });
    }

    let verifying_key = match decode_public_key(pubkey, format) {
        Ok(key) => key,
        Err(e) => {
            warn!(%format, "Rejected public key");
            return VerificationResult::invalid(e);
        }
    };

    let signature = match decode_signature(signature, format) {
        Ok(sig) => sig,
        Err(e) => {
            warn!(%format, "Rejected signature encoding");
            return VerificationResult::invalid(e);
        }
    };

    let digest = hash_message(message.as_bytes());
    match verifying_key.verify_prehash(digest.as_bytes(), &signature) {
        Ok(()) => {
            debug!(len = message.len(), %format, "Signature verified");
            VerificationResult::valid()
        }
        Err(_) => {
            warn!(len = message.len(), %format, "Signature verification failed");
            VerificationResult::invalid(SignatureError::VerificationFailed)
        }
    }
}
