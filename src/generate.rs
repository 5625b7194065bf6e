//! Suffix-constrained identifier construction.
//!
//! Each identifier starts as a random version-4 UUID drawn from an
//! [`EntropySource`]. Its trailing bytes are then overwritten with the
//! suffix. Suffix bytes win over the version and variant bits: a suffix
//! longer than 7 bytes reaches the variant octet and one longer than 9 bytes
//! reaches the version nibble, so such identifiers are no longer
//! RFC 4122 conformant.

use std::io::Write;

use uuid::Uuid;

use crate::error::Error;
use crate::ports::entropy::{EntropySource, UUID_BYTES};
use crate::suffix::Suffix;

/// Builds one identifier ending in `suffix`.
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the random source fails and
/// [`Error::Construct`] if the suffix does not fit in a UUID.
pub fn suffixed_uuid(entropy: &dyn EntropySource, suffix: &Suffix) -> Result<Uuid, Error> {
    let mut bytes = entropy.random_bytes().map_err(|e| Error::Entropy(e.to_string()))?;

    let random_end = UUID_BYTES.checked_sub(suffix.len()).ok_or_else(|| {
        Error::Construct(format!("suffix of {} bytes exceeds {UUID_BYTES}", suffix.len()))
    })?;
    bytes[random_end..].copy_from_slice(suffix.as_bytes());

    Ok(Uuid::from_bytes(bytes))
}

/// Builds `count` identifiers ending in `suffix`, in generation order.
///
/// No deduplication is performed.
///
/// # Errors
///
/// Stops at the first failing generation and returns its error.
pub fn generate(
    entropy: &dyn EntropySource,
    suffix: &Suffix,
    count: usize,
) -> Result<Vec<Uuid>, Error> {
    (0..count).map(|_| suffixed_uuid(entropy, suffix)).collect()
}

/// Generates `count` identifiers and writes each on its own line as soon as
/// it is built.
///
/// Lines written before a failure are left in `out`.
///
/// # Errors
///
/// Returns the first generation error, or [`Error::Output`] if writing fails.
pub fn write_suffixed<W: Write>(
    entropy: &dyn EntropySource,
    suffix: &Suffix,
    count: usize,
    out: &mut W,
) -> Result<(), Error> {
    for i in 0..count {
        let uuid = suffixed_uuid(entropy, suffix)?;
        log::trace!("generated #{i}: {uuid}");
        writeln!(out, "{uuid}")?;
    }
    out.flush()?;
    Ok(())
}
