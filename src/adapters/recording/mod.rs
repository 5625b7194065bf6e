//! Recording adapters that capture interactions to cassettes.

pub mod entropy;

pub use entropy::RecordingEntropy;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
///
/// A value that fails to serialize or a poisoned recorder lock is logged and
/// the interaction skipped; recording never changes what the caller sees.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = match serde_json::to_value(input) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("skipping {port}::{method} recording, input not serializable: {e}");
            return;
        }
    };

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "Ok": inner }),
            Err(e) => {
                log::warn!("skipping {port}::{method} recording, output not serializable: {e}");
                return;
            }
        },
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(e) => log::warn!("skipping {port}::{method} recording, recorder lock poisoned: {e}"),
    }
}
