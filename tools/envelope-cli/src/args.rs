//! Command-line arguments for the `sign-message` and `verify-envelope` binaries.

use std::path::PathBuf;

use clap::Parser;
use signed_envelope::{WireFormat, DEFAULT_KEY_PATH};

/// Sign a short message and print a self-contained JSON envelope
#[derive(Parser, Debug)]
#[command(name = "sign-message", version)]
#[command(about = "Sign a message (at most 250 bytes) with the local P-384 key")]
pub struct SignArgs {
    /// Message text to sign (may start with `-`)
    #[arg(allow_hyphen_values = true)]
    pub message: String,

    /// Private key file, created on first use
    #[arg(long, value_name = "PATH", default_value = DEFAULT_KEY_PATH)]
    pub key_file: PathBuf,

    /// Signature and public key encoding: canonical or fixed-width
    #[arg(long, value_name = "FORMAT", default_value_t = WireFormat::Canonical)]
    pub format: WireFormat,
}

/// Verify a JSON envelope produced by `sign-message`
#[derive(Parser, Debug)]
#[command(name = "verify-envelope", version)]
#[command(about = "Verify a signed message envelope read from a file or stdin")]
pub struct VerifyArgs {
    /// Envelope file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Signature and public key encoding: canonical or fixed-width
    #[arg(long, value_name = "FORMAT", default_value_t = WireFormat::Canonical)]
    pub format: WireFormat,
}
