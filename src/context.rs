//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveEntropy;
use crate::adapters::recording::RecordingEntropy;
use crate::adapters::replaying::ReplayingEntropy;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::{Config, EntropyMode};
use crate::error::Error;
use crate::ports::entropy::EntropySource;

/// Bundles the port trait objects a generation run needs.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Random source for the non-suffix bytes of each identifier.
    pub entropy: Arc<dyn EntropySource>,
    /// Recorder shared with a recording adapter; written out by [`finish`](Self::finish).
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
    /// Replay adapter, checked for leftover draws by [`finish`](Self::finish).
    replay: Option<Arc<ReplayingEntropy>>,
}

impl ServiceContext {
    /// Creates a live context drawing from the operating system.
    #[must_use]
    pub fn live() -> Self {
        Self { entropy: Arc::new(LiveEntropy::new()), recorder: None, replay: None }
    }

    /// Creates a context that draws live entropy and records it to `path`.
    ///
    /// Nothing is written until [`finish`](Self::finish) is called.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "suffuuid-session",
            env!("CARGO_PKG_VERSION"),
        )));
        let entropy = RecordingEntropy::new(Box::new(LiveEntropy::new()), Arc::clone(&recorder));
        Self { entropy: Arc::new(entropy), recorder: Some(recorder), replay: None }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, Error> {
        let cassette = Cassette::load(path).map_err(Error::Cassette)?;
        log::debug!(
            "replaying {} recorded interactions from {}",
            cassette.interactions.len(),
            path.display()
        );
        let replay = Arc::new(ReplayingEntropy::new(CassetteReplayer::new(&cassette)));
        let entropy: Arc<dyn EntropySource> = Arc::clone(&replay) as Arc<dyn EntropySource>;
        Ok(Self { entropy, recorder: None, replay: Some(replay) })
    }

    /// Creates the context selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if a replay cassette cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        match &config.entropy {
            EntropyMode::Live => Ok(Self::live()),
            EntropyMode::Record(path) => Ok(Self::recording(path)),
            EntropyMode::Replay(path) => Self::replaying(path),
        }
    }

    /// Writes out the recorded cassette, if this context was recording.
    ///
    /// Returns the cassette path when one was written. A replay cassette with
    /// draws left over is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Record`] if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, Error> {
        let Self { entropy, recorder, replay } = self;
        // Release the adapter's handle on the recorder first.
        drop(entropy);

        if let Some(replay) = replay {
            let unused = replay.unused_draws();
            if unused > 0 {
                log::warn!("replay cassette has {unused} unused entropy draws");
            }
        }

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| Error::Record("recording adapter still has references".into()))?
            .into_inner()
            .map_err(|e| Error::Record(format!("recorder lock poisoned: {e}")))?;
        let path = recorder.finish().map_err(|e| Error::Record(e.to_string()))?;
        log::info!("recording saved to {}", path.display());
        Ok(Some(path))
    }
}
