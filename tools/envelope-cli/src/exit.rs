//! Process exit codes and the mapping from failures to them.

use clap::error::ErrorKind;
use clap::CommandFactory;
use signed_envelope::{ServiceError, SigningError};

/// Generic failure, or an envelope that does not verify.
pub const EXIT_FAILURE: u8 = 1;

/// Message longer than the signable limit.
pub const EXIT_MESSAGE_TOO_LONG: u8 = 3;

/// Wrong argument count or unknown flag.
pub const EXIT_USAGE: u8 = 42;

/// Report a command-line parse failure and return the exit code.
///
/// `--help` and `--version` print normally and exit 0. Anything else prints
/// clap's diagnostic to stderr and the usage line to stdout.
pub fn report_parse_error<T: CommandFactory>(err: &clap::Error) -> u8 {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => {
            println!("{}", T::command().render_usage());
            EXIT_USAGE
        }
    }
}

/// Exit code for a failed command.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let too_long = matches!(
        err.downcast_ref::<ServiceError>(),
        Some(ServiceError::Signing(SigningError::MessageTooLong { .. }))
    ) || matches!(
        err.downcast_ref::<SigningError>(),
        Some(SigningError::MessageTooLong { .. })
    );

    if too_long {
        EXIT_MESSAGE_TOO_LONG
    } else {
        EXIT_FAILURE
    }
}
