//! # Signed Envelope
//!
//! Signs short text messages with ECDSA over NIST P-384 and binds the message,
//! the signature and the signer's public key into one verifiable record.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Hashing, keys, signing, codecs, envelope. No I/O.
//! - **Ports Layer** (`ports/`): `MessageSigningApi` (inbound), `KeyStore` (outbound)
//! - **Adapters Layer** (`adapters/`): PEM key file on disk, in-memory key store
//! - **Service Layer** (`service.rs`): Wires the key store to the domain
//!
//! ## Wire Formats
//!
//! | Format | Signature | Public key |
//! |--------|-----------|------------|
//! | `Canonical` (default) | DER `SEQUENCE { r, s }` | SEC1 uncompressed `04 ‖ X ‖ Y` |
//! | `FixedWidth` | `r ‖ s`, 48 bytes each | `X ‖ Y`, 48 bytes each |
//!
//! Both are carried as base64 text; public keys inside an `ECDSA PUBLIC KEY`
//! PEM block. A service instance is bound to exactly one format.
//!
//! ## Security Notes
//!
//! - Digest: SHA-256 over the raw message bytes
//! - Nonces: RFC 6979 hedged with fresh OS entropy on every signature
//! - Key file: SEC1 DER in `ECDSA PRIVATE KEY` PEM, mode 0600
//! - A key file that exists but fails to parse is never replaced

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::keystore::FileKeyStore;
pub use adapters::memory::InMemoryKeyStore;
pub use config::{ConfigError, SigningConfig, DEFAULT_KEY_PATH};
pub use domain::codec::{decode_public_key, encode_public_key, WireFormat};
pub use domain::envelope::Envelope;
pub use domain::errors::{EnvelopeError, KeyStoreError, SignatureError, SigningError};
pub use domain::hashing::{hash_message, Digest, DIGEST_LEN};
pub use domain::keys::{KeyPair, COORDINATE_LEN};
pub use domain::signing::{sign, verify, VerificationResult, MAX_MESSAGE_LEN};
pub use ports::inbound::MessageSigningApi;
pub use ports::outbound::KeyStore;
pub use service::{ServiceError, SigningService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
