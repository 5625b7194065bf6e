//! Live adapter for the `EntropySource` port.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use crate::ports::entropy::{EntropySource, UUID_BYTES};

/// Draws randomness from the operating system's CSPRNG.
pub struct LiveEntropy;

impl LiveEntropy {
    /// Creates a new OS-backed entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for LiveEntropy {
    fn random_bytes(&self) -> Result<[u8; UUID_BYTES], Box<dyn std::error::Error + Send + Sync>> {
        let mut bytes = [0u8; UUID_BYTES];
        OsRng.try_fill_bytes(&mut bytes)?;
        // Stamp version 4 and the RFC 4122 variant onto the raw bytes.
        Ok(Builder::from_random_bytes(bytes).into_uuid().into_bytes())
    }
}
