//! # Envelope CLI
//!
//! Shared plumbing for the `sign-message` and `verify-envelope` binaries:
//! argument definitions, exit-code mapping, and log setup.
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success / envelope valid                  |
//! | 1    | Failure / envelope invalid                |
//! | 3    | Message exceeds the 250-byte limit        |
//! | 42   | Wrong argument count or unknown flag      |

pub mod args;
pub mod commands;
pub mod exit;

pub use args::{SignArgs, VerifyArgs};
pub use commands::{run_sign, run_verify};
pub use exit::{exit_code_for, report_parse_error, EXIT_FAILURE, EXIT_MESSAGE_TOO_LONG, EXIT_USAGE};

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// Stdout is reserved for command output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
