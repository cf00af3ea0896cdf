//! CLI surface tests.
//!
//! The orchestrator is a no-argument entry point; only `--help`/`--version`
//! are exercised here, since a bare run would touch the ambient environment.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_build_step() {
    Command::cargo_bin("serial_terminal_build")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Packages the Serial Terminal application",
        ))
        .stdout(predicate::str::contains("pyinstaller"));
}

#[test]
fn version_matches_the_crate() {
    Command::cargo_bin("serial_terminal_build")
        .expect("binary builds")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn stray_arguments_are_rejected() {
    Command::cargo_bin("serial_terminal_build")
        .expect("binary builds")
        .arg("--no-such-flag")
        .assert()
        .failure();
}
