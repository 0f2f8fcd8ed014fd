//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use to sign and verify
//! - **Outbound (Driven)**: Key storage this crate depends on

pub mod inbound;
pub mod outbound;
