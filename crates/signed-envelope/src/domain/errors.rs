//! # Error Types
//!
//! One enum per failure domain:
//! - `SigningError`: producing a signature (input limit, entropy, encoding)
//! - `SignatureError`: decoding and verifying; carried in `VerificationResult`
//! - `KeyStoreError`: key material at rest
//! - `EnvelopeError`: the JSON record
//! - `EntropyError`, `KeyFormatError`: leaf errors folded into the above

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The operating system random source could not supply bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Random source unavailable: {0}")]
pub struct EntropyError(pub String);

/// Private key material could not be encoded or decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyFormatError {
    /// Not a well-formed PEM block
    #[error("invalid PEM: {0}")]
    Pem(String),

    /// PEM block carries a different label
    #[error("unexpected PEM label {found:?}, expected {expected:?}")]
    UnexpectedLabel {
        /// Label the block must carry
        expected: &'static str,
        /// Label found in the input
        found: String,
    },

    /// Payload is not a valid SEC1 P-384 private key
    #[error("invalid private key structure: {0}")]
    Der(String),
}

/// Errors raised while producing a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// Message exceeds the hard input limit
    #[error("Message too long: {len} bytes exceeds the {max}-byte limit")]
    MessageTooLong {
        /// Actual message length in bytes
        len: usize,
        /// Maximum accepted length in bytes
        max: usize,
    },

    /// The operating system random source failed
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    /// The signature could not be produced or encoded
    #[error("Signature encoding failed: {0}")]
    Encoding(String),
}

impl From<EntropyError> for SigningError {
    fn from(err: EntropyError) -> Self {
        SigningError::RandomSource(err.0)
    }
}

/// Errors that can occur during signature verification.
///
/// Verification never surfaces these as `Err`; they are reported through
/// `VerificationResult::error`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Public key text is malformed or the point is not on the curve
    #[error("Invalid public key")]
    InvalidKey,

    /// Signature text is malformed or R/S are out of range
    #[error("Invalid signature format")]
    InvalidSignature,

    /// The verification equation does not hold
    #[error("Signature verification failed")]
    VerificationFailed,

    /// No valid envelope can carry a message this long
    #[error("Message too long: {len} bytes exceeds the {max}-byte limit")]
    MessageTooLong {
        /// Actual message length in bytes
        len: usize,
        /// Maximum accepted length in bytes
        max: usize,
    },
}

/// Errors from loading, saving or generating the persisted key pair.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// No key file exists at the configured location
    #[error("No key found at {}", path.display())]
    NotFound {
        /// Location that was probed
        path: PathBuf,
    },

    /// A key file exists but does not hold a valid P-384 private key
    #[error("Malformed key at {}: {reason}", path.display())]
    Parse {
        /// Location of the malformed key
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Reading or writing the key file failed for a reason other than absence
    #[error("Key storage I/O error at {}: {source}", path.display())]
    Io {
        /// Location being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The key creation lock could not be taken
    #[error("Failed to lock {}: {source}", path.display())]
    Lock {
        /// Lock file location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The operating system random source failed during key generation
    #[error("Random source unavailable: {0}")]
    RandomSource(String),
}

impl From<EntropyError> for KeyStoreError {
    fn from(err: EntropyError) -> Self {
        KeyStoreError::RandomSource(err.0)
    }
}

impl KeyStoreError {
    /// True when the key is simply absent (the only case that may trigger generation).
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeyStoreError::NotFound { .. })
    }
}

/// Errors from the envelope record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Input is not a well-formed envelope
    #[error("Malformed envelope: {0}")]
    Malformed(String),

    /// Envelope could not be serialized
    #[error("Envelope serialization failed: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_too_long_display() {
        let err = SigningError::MessageTooLong { len: 251, max: 250 };
        assert_eq!(
            err.to_string(),
            "Message too long: 251 bytes exceeds the 250-byte limit"
        );
    }

    #[test]
    fn test_not_found_is_distinguished() {
        let missing = KeyStoreError::NotFound {
            path: PathBuf::from("key.pem"),
        };
        let corrupt = KeyStoreError::Parse {
            path: PathBuf::from("key.pem"),
            reason: "bad label".into(),
        };
        assert!(missing.is_not_found());
        assert!(!corrupt.is_not_found());
        assert!(corrupt.to_string().contains("key.pem"));
    }
}
