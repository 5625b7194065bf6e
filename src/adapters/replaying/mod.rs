//! Replaying adapters that replay recorded interactions.

pub mod entropy;

pub use entropy::ReplayingEntropy;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Replay a `Result<T, String>` recorded under the Ok/Err JSON convention.
///
/// Mirror of `recording::record_result`. Running out of interactions, or an
/// output that matches neither `{"Ok": v}` nor `{"Err": msg}`, is reported
/// as an `Err` like any recorded failure.
pub(crate) fn replay_result<T>(
    replayer: &mut CassetteReplayer,
    port: &str,
    method: &str,
) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let interaction = replayer.next_interaction(port, method)?;
    let seq = interaction.seq;

    if let Some(ok) = interaction.output.get("Ok") {
        return serde_json::from_value(ok.clone())
            .map_err(|e| format!("{port}::{method} seq={seq}: malformed Ok value: {e}"));
    }
    if let Some(err) = interaction.output.get("Err") {
        return Err(err.as_str().map_or_else(|| err.to_string(), str::to_string));
    }
    Err(format!("{port}::{method} seq={seq}: output is neither Ok nor Err"))
}
