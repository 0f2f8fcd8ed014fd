//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod codec;
pub mod envelope;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod signing;
