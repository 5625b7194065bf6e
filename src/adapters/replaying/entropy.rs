//! Replaying adapter for the `EntropySource` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::entropy::{EntropySource, UUID_BYTES};

const PORT: &str = "entropy";
const METHOD: &str = "random_bytes";

/// Replays recorded entropy draws from a cassette.
///
/// Draws are served in recording order; once the cassette runs out every
/// further draw fails.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Recorded draws that have not been served yet.
    #[must_use]
    pub fn unused_draws(&self) -> usize {
        match self.replayer.lock() {
            Ok(replayer) => replayer.remaining(PORT, METHOD),
            Err(poisoned) => poisoned.into_inner().remaining(PORT, METHOD),
        }
    }
}

impl EntropySource for ReplayingEntropy {
    fn random_bytes(&self) -> Result<[u8; UUID_BYTES], Box<dyn std::error::Error + Send + Sync>> {
        let drawn: String = {
            let mut replayer =
                self.replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
            replay_result(&mut replayer, PORT, METHOD)?
        };

        let mut bytes = [0u8; UUID_BYTES];
        hex::decode_to_slice(&drawn, &mut bytes)
            .map_err(|e| format!("recorded draw {drawn:?} is not {UUID_BYTES} hex bytes: {e}"))?;
        Ok(bytes)
    }
}
