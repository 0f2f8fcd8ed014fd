//! # Outbound Ports (Driven Ports / SPI)
//!
//! Persistence of the single signing key.

use tracing::info;

use crate::domain::errors::KeyStoreError;
use crate::domain::keys::KeyPair;

/// Storage for the one key pair this tool signs with.
pub trait KeyStore {
    /// Load the persisted key pair.
    ///
    /// # Errors
    /// * `KeyStoreError::NotFound` - nothing is persisted yet
    /// * `KeyStoreError::Parse` - something is persisted but is not a valid key
    /// * `KeyStoreError::Io` - storage failed for any other reason
    fn load(&self) -> Result<KeyPair, KeyStoreError>;

    /// Persist a key pair, replacing any previous one.
    fn save(&self, key: &KeyPair) -> Result<(), KeyStoreError>;

    /// Load the key pair, generating and persisting one only if none exists.
    ///
    /// A key that exists but fails to load is an error; it is never replaced.
    fn load_or_generate(&self) -> Result<KeyPair, KeyStoreError> {
        match self.load() {
            Ok(key) => Ok(key),
            Err(KeyStoreError::NotFound { .. }) => {
                let key = KeyPair::generate()?;
                self.save(&key)?;
                info!(?key, "Generated new signing key");
                Ok(key)
            }
            Err(e) => Err(e),
        }
    }
}
