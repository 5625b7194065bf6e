//! Record-replay round-trip integration test.
//!
//! 1. Run the binary with `SUFFUUID_RECORD` to capture its entropy draws.
//! 2. Run it again with `SUFFUUID_REPLAY` on the same cassette.
//! 3. Assert the printed identifiers are identical.
//! 4. Replay a hand-built cassette that runs out early and check the partial
//!    output and the error.
//! 5. Check the cassette is still written when a recorded run fails.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;

use suffuuid::cassette::format::Cassette;
use suffuuid::cassette::recorder::CassetteRecorder;
use suffuuid::cli::Cli;
use suffuuid::config::{Config, EntropyMode};
use suffuuid::Error;

/// Writer whose every write fails, like a closed stdout.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_with_env(args: &[&str], var: &str, cassette: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_suffuuid"))
        .args(args)
        .env_remove("SUFFUUID_RECORD")
        .env_remove("SUFFUUID_REPLAY")
        .env(var, cassette)
        .output()
        .expect("failed to run suffuuid binary")
}

#[test]
fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("suffuuid_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    // --- Phase 1: Record ---
    let recorded = run_with_env(&["c0ffee", "--count", "4"], "SUFFUUID_RECORD", &cassette_path);
    assert!(recorded.status.success());
    let recorded_stdout = String::from_utf8(recorded.stdout).unwrap();
    assert_eq!(recorded_stdout.lines().count(), 4);

    let cassette = Cassette::load(&cassette_path).unwrap();
    assert_eq!(cassette.interactions.len(), 4);
    assert!(cassette.interactions.iter().all(|i| i.port == "entropy"));

    // --- Phase 2: Replay ---
    let replayed = run_with_env(&["c0ffee", "--count", "4"], "SUFFUUID_REPLAY", &cassette_path);
    assert!(replayed.status.success());
    assert_eq!(String::from_utf8(replayed.stdout).unwrap(), recorded_stdout);

    // --- Phase 3: Same draws, different suffix ---
    let resuffixed = run_with_env(&["1", "--count", "4"], "SUFFUUID_REPLAY", &cassette_path);
    let resuffixed_stdout = String::from_utf8(resuffixed.stdout).unwrap();
    for (a, b) in recorded_stdout.lines().zip(resuffixed_stdout.lines()) {
        assert_eq!(a[..30], b[..30], "random prefix should match");
        assert!(b.ends_with("01"));
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn exhausted_cassette_keeps_earlier_lines_and_fails() {
    let dir = std::env::temp_dir().join("suffuuid_exhausted_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("short.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "short", "0.1.0");
    recorder.record(
        "entropy",
        "random_bytes",
        json!(null),
        json!({"Ok": "00112233445566778899aabbccddeeff"}),
    );
    recorder.record(
        "entropy",
        "random_bytes",
        json!(null),
        json!({"Ok": "ffeeddccbbaa99887766554433221100"}),
    );
    recorder.finish().unwrap();

    let output = run_with_env(&["beef", "--count", "3"], "SUFFUUID_REPLAY", &cassette_path);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert_eq!(
        stdout,
        "00112233-4455-6677-8899-aabbccddbeef\nffeeddcc-bbaa-9988-7766-55443322beef\n"
    );
    assert!(stderr.contains("error while generating randomness: cassette exhausted"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn recorded_failure_replays_as_runtime_error() {
    let dir = std::env::temp_dir().join("suffuuid_failed_draw_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("failure.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "failure", "0.1.0");
    recorder.record("entropy", "random_bytes", json!(null), json!({"Err": "rng unavailable"}));
    recorder.finish().unwrap();

    let output = run_with_env(&["ab"], "SUFFUUID_REPLAY", &cassette_path);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("error while generating randomness: rng unavailable"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_replay_cassette_is_reported() {
    let output = run_with_env(&["ab"], "SUFFUUID_REPLAY", Path::new("/nonexistent/none.yaml"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!output.status.success());
    assert!(stderr.contains("error while loading cassette"));
}

#[test]
fn zero_count_still_writes_an_empty_cassette() {
    let dir = std::env::temp_dir().join("suffuuid_zero_count_record_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("empty.cassette.yaml");

    let output = run_with_env(&["ab", "--count", "0"], "SUFFUUID_RECORD", &cassette_path);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let cassette = Cassette::load(&cassette_path).unwrap();
    assert_eq!(cassette.version, env!("CARGO_PKG_VERSION"));
    assert!(cassette.interactions.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failed_output_still_saves_the_recording() {
    let dir = std::env::temp_dir().join("suffuuid_failed_output_record_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("partial.cassette.yaml");

    let cli = Cli { args: vec!["beef".into()], count: 3 };
    let config = Config { entropy: EntropyMode::Record(cassette_path.clone()) };
    let result = suffuuid::execute(&cli, &config, &mut BrokenPipe);
    assert!(matches!(result, Err(Error::Output(_))), "{result:?}");

    // Generation stopped at the first write, after a single draw.
    let cassette = Cassette::load(&cassette_path).unwrap();
    assert_eq!(cassette.interactions.len(), 1);
    assert!(cassette.interactions[0].output.get("Ok").is_some());

    let _ = std::fs::remove_dir_all(&dir);
}
