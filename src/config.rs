//! Environment-driven configuration.
//!
//! `main` loads a `.env` file with `dotenvy` before this is read, so values
//! there act as defaults beneath the real environment.

use std::path::PathBuf;

use crate::error::Error;

/// Environment variable naming a cassette to record entropy draws into.
pub const RECORD_VAR: &str = "SUFFUUID_RECORD";
/// Environment variable naming a cassette to replay entropy draws from.
pub const REPLAY_VAR: &str = "SUFFUUID_REPLAY";

/// Where identifiers get their randomness from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntropyMode {
    /// Operating system CSPRNG.
    #[default]
    Live,
    /// Operating system CSPRNG, with every draw written to a cassette.
    Record(PathBuf),
    /// Draws served from a previously recorded cassette.
    Replay(PathBuf),
}

/// Runtime configuration outside the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Entropy source selection.
    pub entropy: EntropyMode,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when recording and replaying are both requested.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var_os(name).map(PathBuf::from))
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when recording and replaying are both requested.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let get = |name: &str| lookup(name).filter(|p| !p.as_os_str().is_empty());

        let entropy = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (None, None) => EntropyMode::Live,
            (Some(path), None) => EntropyMode::Record(path),
            (None, Some(path)) => EntropyMode::Replay(path),
            (Some(_), Some(_)) => {
                return Err(Error::Config(format!(
                    "{RECORD_VAR} and {REPLAY_VAR} cannot both be set"
                )));
            }
        };

        log::debug!("entropy mode: {entropy:?}");
        Ok(Self { entropy })
    }
}
