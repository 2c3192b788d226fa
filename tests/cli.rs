//! CLI integration tests for the `keystore-migrator` binary.
//!
//! These cover the paths that end before any network call: argument
//! errors, unsupported networks and help output.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still works

use assert_cmd::Command;
use predicates::prelude::*;

fn migrator() -> Command {
    Command::cargo_bin("keystore-migrator").unwrap()
}

#[test]
fn test_help_exits_zero() {
    migrator()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--keystores-path"))
        .stdout(predicate::str::contains("--wallet-password-path"));
}

#[test]
fn test_missing_argument_exits_one() {
    migrator()
        .args(["--keystores-path", "/tmp/keystores", "--network", "prater"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing argument"))
        .stderr(predicate::str::contains("--wallet-password-path"));
}

#[test]
fn test_unsupported_network_exits_one() {
    migrator()
        .args([
            "--keystores-path",
            "/tmp/keystores",
            "--wallet-password-path",
            "/tmp/password.txt",
            "--network",
            "holesky",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("network not supported: holesky"));
}

#[test]
fn test_invalid_config_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("migrator.toml");
    std::fs::write(&config, "[delivery]\nmax_attempts = 0\n").unwrap();

    migrator()
        .args([
            "--keystores-path",
            "/tmp/keystores",
            "--wallet-password-path",
            "/tmp/password.txt",
            "--network",
            "mainnet",
            "--config",
        ])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_attempts"));
}

#[test]
fn test_missing_keystores_dir_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();
    let password = dir.path().join("password.txt");
    std::fs::write(&password, "s3cret\n").unwrap();

    migrator()
        .args(["--network", "gnosis", "--keystores-path"])
        .arg(dir.path().join("missing"))
        .arg("--wallet-password-path")
        .arg(&password)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}
