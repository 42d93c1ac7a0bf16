//! Shared E2E test helpers for `permatrix` binary tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::Path;
use std::time::Duration;

/// Default timeout for CLI tests.
pub const TIMEOUT_BASIC: Duration = Duration::from_secs(10);

/// Variables the loader reads; cleared so the host environment cannot
/// leak into a test.
const CONFIG_VARS: &[&str] = &[
    "PERMATRIX_DEBUG",
    "PERMATRIX_VERBOSE",
    "PERMATRIX_ROLE",
    "PERMATRIX_SEED",
    "RUST_LOG",
];

/// Build a Command for the `permatrix` binary isolated in a tempdir.
///
/// The tempdir is both `HOME` (no global config) and the working
/// directory (project root). Returns (command, _guard); keep the guard
/// alive for the test's duration.
pub fn permatrix_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir for project");
    let cmd = permatrix_cmd_in(tmp.path());
    (cmd, tmp)
}

/// Build an isolated Command rooted at an existing directory (for multi-step tests).
pub fn permatrix_cmd_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("permatrix");
    cmd.timeout(TIMEOUT_BASIC);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", dir).current_dir(dir);
    cmd
}
