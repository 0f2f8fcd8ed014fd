//! Command bodies, parameterized over their I/O streams.

use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use signed_envelope::{Envelope, MessageSigningApi, SigningConfig, SigningService};
use tracing::debug;

use crate::args::{SignArgs, VerifyArgs};

/// Sign `args.message` and write the envelope as one line of JSON.
pub fn run_sign(args: &SignArgs, out: &mut impl Write) -> Result<()> {
    let config = SigningConfig::default()
        .with_key_path(&args.key_file)
        .with_wire_format(args.format);
    let service = SigningService::from_config(&config).context("invalid configuration")?;

    let envelope = service
        .sign_message(&args.message)
        .context("failed to sign message")?;
    let json = envelope.to_json().context("failed to encode envelope")?;

    writeln!(out, "{json}").context("failed to write envelope")?;
    debug!(bytes = json.len(), "Envelope written");
    Ok(())
}

/// Verify one envelope and report `valid` or `invalid: <reason>`.
///
/// Returns whether the envelope verified. Unreadable or malformed input is
/// an error rather than an invalid verdict.
pub fn run_verify(args: &VerifyArgs, mut stdin: impl Read, out: &mut impl Write) -> Result<bool> {
    let input = match &args.input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read envelope from stdin")?;
            buf
        }
    };

    let envelope = Envelope::parse(&input).context("failed to parse envelope")?;
    let result = envelope.verify(args.format);

    let written = match &result.error {
        None if result.valid => writeln!(out, "valid"),
        Some(reason) => writeln!(out, "invalid: {reason}"),
        None => writeln!(out, "invalid"),
    };
    written.context("failed to write verdict")?;

    Ok(result.valid)
}
