//! Generate random UUIDs that all end in a shared hex suffix.
//!
//! Records created by a tool or test run with such identifiers can later be
//! found and bulk-removed by matching on the suffix.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod ports;
pub mod suffix;

use std::io::Write;

use clap::Parser;

pub use error::Error;
pub use generate::{generate, suffixed_uuid, write_suffixed};
pub use suffix::Suffix;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments, writing identifiers to `out`.
///
/// Configuration is read from the process environment.
///
/// # Errors
///
/// Returns an error when argument parsing fails, the configuration is
/// inconsistent, or generation fails.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    execute(&cli, &Config::from_env()?, out)
}

/// Validate the parsed arguments and print `cli.count` suffixed identifiers.
///
/// Arguments are validated before the entropy source is touched. A
/// recording cassette is written even when generation fails part way.
///
/// # Errors
///
/// Returns the first validation, generation, output, or cassette error.
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<(), Error> {
    let suffix = cli.suffix()?;
    log::debug!("generating {} uuids with suffix {suffix}", cli.count);

    let ctx = ServiceContext::from_config(config)?;
    let result = write_suffixed(ctx.entropy.as_ref(), &suffix, cli.count, out);
    let finished = ctx.finish();

    result?;
    finished?;
    Ok(())
}
