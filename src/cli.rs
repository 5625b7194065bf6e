//! CLI argument definitions.

use clap::Parser;

use crate::error::Error;
use crate::suffix::Suffix;

/// Top-level CLI parser for `suffuuid`.
///
/// The suffix is collected as a list so that a missing or extra argument
/// gets a domain message rather than a generic usage error.
#[derive(Debug, Parser)]
#[command(
    name = "suffuuid",
    version,
    about = "suffuuid generates UUIDs with static suffixes",
    long_about = "A generator for identifiable UUIDs with a shared suffix to make \
                  identification, manipulation or removal easier in database data."
)]
pub struct Cli {
    /// Lowercase hex suffix every UUID ends with (odd lengths get a leading 0).
    #[arg(value_name = "SUFFIX")]
    pub args: Vec<String>,

    /// The number of UUIDs to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

impl Cli {
    /// Validates the positional arguments into a single suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSuffix`], [`Error::UnexpectedArguments`], or the
    /// suffix parser's error.
    pub fn suffix(&self) -> Result<Suffix, Error> {
        match self.args.as_slice() {
            [] => Err(Error::MissingSuffix),
            [suffix] => Suffix::parse(suffix),
            _ => Err(Error::UnexpectedArguments),
        }
    }
}
