//! # Signing Configuration
//!
//! Where the key lives and which wire format envelopes use. The core reads
//! nothing from the environment; callers build this value explicitly.

use std::path::{Path, PathBuf};

use crate::domain::codec::WireFormat;

/// Default key file, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "ecdsa-private-key.pem";

/// Signing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// Location of the persisted private key.
    pub key_path: PathBuf,
    /// Encoding used for both signing and verifying.
    pub wire_format: WireFormat,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from(DEFAULT_KEY_PATH),
            wire_format: WireFormat::default(),
        }
    }
}

impl SigningConfig {
    /// Use a different key file.
    pub fn with_key_path(mut self, path: impl AsRef<Path>) -> Self {
        self.key_path = path.as_ref().to_path_buf();
        self
    }

    /// Use a different wire format.
    pub fn with_wire_format(mut self, format: WireFormat) -> Self {
        self.wire_format = format;
        self
    }

    /// Validate the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Err` if the key path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyKeyPath);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Key path is empty.
    #[error("Key path must not be empty")]
    EmptyKeyPath,
}
