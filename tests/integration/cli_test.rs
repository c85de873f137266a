//! Integration tests for the marquee binary
//!
//! Only paths that exit before the terminal is taken over are covered here.

use assert_cmd::Command;
use predicates::prelude::*;

fn marquee() -> Command {
    let mut cmd = Command::cargo_bin("marquee").expect("marquee binary");
    cmd.env_remove("MARQUEE_LOG_FILE");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_shows_usage_and_examples() {
    marquee()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: marquee"))
        .stdout(predicate::str::contains("--accident"))
        .stdout(predicate::str::contains("Press 'q' to stop."));
}

#[test]
fn version_starts_with_package_version() {
    marquee()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "marquee {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn empty_stdin_prints_help_and_fails() {
    marquee()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: marquee"));
}

#[test]
fn zero_count_is_a_usage_error() {
    marquee()
        .args(["--count", "0", "text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--count"));
}

#[test]
fn loop_and_count_conflict() {
    marquee()
        .args(["--loop", "--count", "3", "text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn strict_mode_rejects_oversized_input() {
    marquee()
        .arg("--strict")
        .write_stdin("x\n".repeat(300))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Capacity exceeded: lines per block"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation]\ndirection = \"sideways\"\n").unwrap();

    marquee()
        .arg("--config")
        .arg(&path)
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
