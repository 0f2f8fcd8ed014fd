//! # Wire Codecs
//!
//! Text encodings for signatures and public keys.
//!
//! A `WireFormat` is chosen once and used for both directions. Decoding never
//! guesses: text produced under one format fails to decode under the other.
//!
//! ## Security Notes
//!
//! - Signatures are either strict DER or exactly 96 bytes; variable-length
//!   `r ‖ s` concatenation is neither produced nor accepted
//! - Decoded points are checked to lie on P-384 and not be the identity
//! - Decoded scalars are checked to lie in `[1, n-1]`

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use p384::ecdsa::{Signature, VerifyingKey};
use pem_rfc7468::LineEnding;
use serde::{Deserialize, Serialize};

use super::errors::{SignatureError, SigningError};
use super::keys::COORDINATE_LEN;

/// PEM label of an encoded public key.
pub const PUBLIC_KEY_LABEL: &str = "ECDSA PUBLIC KEY";

/// SEC1 tag byte of an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Fixed-width signature length (`r ‖ s`).
pub const FIXED_SIGNATURE_LEN: usize = 2 * COORDINATE_LEN;

/// Raw public key length (`X ‖ Y`).
pub const RAW_PUBLIC_KEY_LEN: usize = 2 * COORDINATE_LEN;

/// Signature and public-key encoding pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireFormat {
    /// DER `SEQUENCE { INTEGER r, INTEGER s }` + SEC1 uncompressed point
    #[default]
    Canonical,
    /// 48-byte big-endian `r ‖ s` + untagged `X ‖ Y`
    FixedWidth,
}

impl WireFormat {
    /// Stable name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WireFormat::Canonical => "canonical",
            WireFormat::FixedWidth => "fixed-width",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(WireFormat::Canonical),
            "fixed-width" => Ok(WireFormat::FixedWidth),
            other => Err(format!(
                "unknown wire format {other:?} (expected \"canonical\" or \"fixed-width\")"
            )),
        }
    }
}

// =============================================================================
// SIGNATURES
// =============================================================================

/// Encode a signature as base64 text.
pub fn encode_signature(signature: &Signature, format: WireFormat) -> String {
    match format {
        WireFormat::Canonical => BASE64.encode(signature.to_der().as_bytes()),
        WireFormat::FixedWidth => BASE64.encode(signature.to_bytes()),
    }
}

/// Decode base64 signature text.
pub fn decode_signature(text: &str, format: WireFormat) -> Result<Signature, SignatureError> {
    let bytes = BASE64
        .decode(text)
        .map_err(|_| SignatureError::InvalidSignature)?;

    match format {
        WireFormat::Canonical => {
            Signature::from_der(&bytes).map_err(|_| SignatureError::InvalidSignature)
        }
        WireFormat::FixedWidth => {
            if bytes.len() != FIXED_SIGNATURE_LEN {
                return Err(SignatureError::InvalidSignature);
            }
            Signature::from_slice(&bytes).map_err(|_| SignatureError::InvalidSignature)
        }
    }
}

// =============================================================================
// PUBLIC KEYS
// =============================================================================

/// Encode a public key as an `ECDSA PUBLIC KEY` PEM block.
pub fn encode_public_key(key: &VerifyingKey, format: WireFormat) -> Result<String, SigningError> {
    let point = key.to_encoded_point(false);
    let payload = match format {
        WireFormat::Canonical => point.as_bytes(),
        WireFormat::FixedWidth => &point.as_bytes()[1..],
    };

    pem_rfc7468::encode_string(PUBLIC_KEY_LABEL, LineEnding::LF, payload)
        .map_err(|e| SigningError::Encoding(e.to_string()))
}

/// Decode an `ECDSA PUBLIC KEY` PEM block.
///
/// The text must be byte-identical to what [`encode_public_key`] produces for
/// the decoded key: LF line endings, 64-column body, trailing newline.
pub fn decode_public_key(text: &str, format: WireFormat) -> Result<VerifyingKey, SignatureError> {
    let (label, payload) =
        pem_rfc7468::decode_vec(text.as_bytes()).map_err(|_| SignatureError::InvalidKey)?;

    if label != PUBLIC_KEY_LABEL {
        return Err(SignatureError::InvalidKey);
    }

    let sec1 = match format {
        WireFormat::Canonical => {
            if payload.len() != 1 + RAW_PUBLIC_KEY_LEN || payload[0] != UNCOMPRESSED_TAG {
                return Err(SignatureError::InvalidKey);
            }
            payload
        }
        WireFormat::FixedWidth => {
            if payload.len() != RAW_PUBLIC_KEY_LEN {
                return Err(SignatureError::InvalidKey);
            }
            let mut tagged = Vec::with_capacity(1 + RAW_PUBLIC_KEY_LEN);
            tagged.push(UNCOMPRESSED_TAG);
            tagged.extend_from_slice(&payload);
            tagged
        }
    };

    let key = VerifyingKey::from_sec1_bytes(&sec1).map_err(|_| SignatureError::InvalidKey)?;

    // Alternate line endings decode to the same point
    match encode_public_key(&key, format) {
        Ok(canonical) if canonical == text => Ok(key),
        _ => Err(SignatureError::InvalidKey),
    }
}
