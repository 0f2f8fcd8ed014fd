//! sign-message: sign one message with the local P-384 key.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use envelope_cli::{exit_code_for, init_tracing, report_parse_error, run_sign, SignArgs};

fn main() -> ExitCode {
    let args = match SignArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return ExitCode::from(report_parse_error::<SignArgs>(&err)),
    };

    init_tracing();

    match run_sign(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sign-message: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
