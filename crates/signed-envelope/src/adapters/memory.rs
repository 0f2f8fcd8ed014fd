//! In-memory `KeyStore` used by service tests.

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use crate::domain::errors::KeyStoreError;
use crate::domain::keys::KeyPair;
use crate::ports::outbound::KeyStore;

/// Key store holding the PEM text in memory.
///
/// Behaves like `FileKeyStore` without touching disk. Can be seeded with
/// arbitrary text to simulate a corrupt key file.
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    pem: RefCell<Option<String>>,
}

impl InMemoryKeyStore {
    /// Pseudo-path reported in errors.
    const LOCATION: &'static str = "<memory>";

    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `contents`, valid or not.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            pem: RefCell::new(Some(contents.into())),
        }
    }

    /// Current stored text.
    pub fn contents(&self) -> Option<String> {
        self.pem.borrow().clone()
    }
}

impl KeyStore for InMemoryKeyStore {
    fn load(&self) -> Result<KeyPair, KeyStoreError> {
        let pem = self.pem.borrow();
        let text = pem.as_deref().ok_or_else(|| KeyStoreError::NotFound {
            path: PathBuf::from(Self::LOCATION),
        })?;

        KeyPair::from_pem(text).map_err(|e| KeyStoreError::Parse {
            path: PathBuf::from(Self::LOCATION),
            reason: e.to_string(),
        })
    }

    fn save(&self, key: &KeyPair) -> Result<(), KeyStoreError> {
        let pem = key.to_pem().map_err(|e| KeyStoreError::Io {
            path: PathBuf::from(Self::LOCATION),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        *self.pem.borrow_mut() = Some(pem.as_str().to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = InMemoryKeyStore::new();
        assert!(store.load().unwrap_err().is_not_found());

        let key = store.load_or_generate().unwrap();
        assert_eq!(store.load().unwrap().public_point(), key.public_point());
        assert!(store.contents().unwrap().contains("ECDSA PRIVATE KEY"));
    }

    #[test]
    fn test_seeded_garbage_is_parse_error() {
        let store = InMemoryKeyStore::with_contents("garbage");
        assert!(matches!(
            store.load_or_generate(),
            Err(KeyStoreError::Parse { .. })
        ));
        assert_eq!(store.contents().as_deref(), Some("garbage"));
    }
}
