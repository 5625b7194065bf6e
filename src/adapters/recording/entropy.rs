//! Recording adapter for the `EntropySource` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::entropy::{EntropySource, UUID_BYTES};

/// Records every entropy draw while delegating to an inner implementation.
///
/// Draws are stored as 32 lowercase hex digits.
pub struct RecordingEntropy {
    inner: Box<dyn EntropySource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn EntropySource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl EntropySource for RecordingEntropy {
    fn random_bytes(&self) -> Result<[u8; UUID_BYTES], Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.random_bytes();
        let as_hex = result.as_ref().map(hex::encode);
        record_result(&self.recorder, "entropy", "random_bytes", &(), &as_hex);
        result
    }
}
