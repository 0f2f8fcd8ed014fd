//! # Adapters Module
//!
//! Key store implementations.
//!
//! ## Modules
//!
//! - `keystore`: PEM key file on local storage
//! - `lock`: Exclusive lock serializing first-run key creation
//! - `memory`: In-memory key store for tests and embedding

pub mod keystore;
pub mod lock;
pub mod memory;

pub use keystore::FileKeyStore;
pub use lock::KeyFileLock;
pub use memory::InMemoryKeyStore;
