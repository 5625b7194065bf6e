//! Entropy port supplying the random half of every identifier.

/// Binary width of a UUID.
pub const UUID_BYTES: usize = 16;

/// Supplies fresh version-4 UUIDs in their 16-byte binary form.
///
/// Abstracting the random source allows deterministic replay by substituting
/// recorded draws during tests and cassette playback.
pub trait EntropySource: Send + Sync {
    /// Draws the binary encoding of a new random (version 4) UUID.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying random source is unavailable or
    /// exhausted. Callers treat this as fatal.
    fn random_bytes(&self) -> Result<[u8; UUID_BYTES], Box<dyn std::error::Error + Send + Sync>>;
}
