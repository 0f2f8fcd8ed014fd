//! # Message Hashing
//!
//! SHA-256 over the raw message bytes. The algorithm is fixed so any
//! compliant verifier reproduces the digest bit-for-bit.

use sha2::{Digest as _, Sha256};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest of a message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash a message.
pub fn hash_message(message: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(message);
    Digest(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_known_answer() {
        assert_eq!(
            hash_message(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc_known_answer() {
        assert_eq!(
            hash_message(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic_and_sensitive() {
        assert_eq!(hash_message(b"hello-world"), hash_message(b"hello-world"));
        assert_ne!(hash_message(b"hello-world"), hash_message(b"hello-worle"));
        assert_eq!(hash_message(b"x").as_bytes().len(), DIGEST_LEN);
    }
}
