//! Binary entrypoint for the `suffuuid` CLI.

use std::io;
use std::process::ExitCode;

use suffuuid::Error;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let result = {
        let mut out = io::stdout().lock();
        suffuuid::run(std::env::args_os(), &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // clap renders help, version, and usage errors with its own exit codes.
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
