//! verify-envelope: check a signed message envelope.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use envelope_cli::{
    exit_code_for, init_tracing, report_parse_error, run_verify, VerifyArgs, EXIT_FAILURE,
};

fn main() -> ExitCode {
    let args = match VerifyArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return ExitCode::from(report_parse_error::<VerifyArgs>(&err)),
    };

    init_tracing();

    match run_verify(&args, io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FAILURE),
        Err(err) => {
            eprintln!("verify-envelope: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
