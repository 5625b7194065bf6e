//! Parsing of the hex suffix shared by every generated identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, MAX_SUFFIX_BYTES};

/// Trailing byte pattern written into the low-order bytes of each UUID.
///
/// Holds between 0 and 16 bytes. Parsed from lowercase hex; an odd number of
/// digits is read as if a leading `0` had been written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suffix(Vec<u8>);

impl Suffix {
    /// Parses a lowercase hex string into a suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] when `value` is empty or contains anything
    /// other than `0-9a-f`, and [`Error::TooLong`] when it decodes to more than
    /// 16 bytes.
    pub fn parse(value: &str) -> Result<Self, Error> {
        if !is_valid_hex(value) {
            return Err(Error::InvalidHex(value.to_string()));
        }

        let bytes = value.len().div_ceil(2);
        if bytes > MAX_SUFFIX_BYTES {
            return Err(Error::TooLong { value: value.to_string(), bytes });
        }

        let digits = if value.len() % 2 == 1 { format!("0{value}") } else { value.to_string() };
        let decoded = hex::decode(digits).map_err(|e| Error::InvalidHex(format!("{value} ({e})")))?;

        Ok(Self(decoded))
    }

    /// The decoded suffix bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes the suffix occupies at the end of a UUID.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the suffix leaves the whole UUID random.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Suffix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the canonical, even-length hex form (`abc` shows as `0abc`).
impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// Matches `^[0-9a-f]+$`.
fn is_valid_hex(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
