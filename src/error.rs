//! Error taxonomy for suffix validation and identifier generation.

use thiserror::Error;

/// Maximum number of suffix bytes; a UUID is 16 bytes wide.
pub const MAX_SUFFIX_BYTES: usize = 16;

/// Errors produced while validating input or generating identifiers.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be parsed, or help/version was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// No suffix argument was given.
    #[error("requires a UUID suffix")]
    MissingSuffix,

    /// More than one positional argument was given.
    #[error("unknown arguments provided")]
    UnexpectedArguments,

    /// The suffix is empty or contains characters outside `[0-9a-f]`.
    #[error("invalid hex string provided: {0}")]
    InvalidHex(String),

    /// The suffix decodes to more bytes than a UUID holds.
    #[error(
        "suffix too long: {value} decodes to {bytes} bytes, at most {max} fit in a UUID",
        max = MAX_SUFFIX_BYTES
    )]
    TooLong {
        /// The rejected hex string.
        value: String,
        /// Decoded byte length.
        bytes: usize,
    },

    /// The entropy source failed or ran dry.
    #[error("error while generating randomness: {0}")]
    Entropy(String),

    /// The suffixed byte buffer could not be assembled.
    #[error("error while constructing uuid: {0}")]
    Construct(String),

    /// Writing an identifier to the output stream failed.
    #[error("error while writing output: {0}")]
    Output(#[from] std::io::Error),

    /// Environment configuration is inconsistent.
    #[error("error while reading configuration: {0}")]
    Config(String),

    /// A replay cassette could not be loaded.
    #[error("error while loading cassette: {0}")]
    Cassette(String),

    /// A recorded cassette could not be written.
    #[error("error while writing cassette: {0}")]
    Record(String),
}
