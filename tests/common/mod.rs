//! Shared integration-test helpers for running `recipedoc`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Absolute path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs the built binary with `args` and waits for it to exit.
///
/// Inherited `RECIPEDOC_*` variables are cleared so the host environment
/// cannot change defaults.
#[allow(clippy::missing_panics_doc)]
pub fn run_recipedoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recipedoc"))
        .args(args)
        .env_remove("RECIPEDOC_CATALOG")
        .env_remove("RECIPEDOC_CONFIG")
        .env_remove("RECIPEDOC_ROOT_PREFIX")
        .env_remove("RECIPEDOC_LOG_LEVEL")
        .output()
        .expect("failed to run recipedoc")
}

/// Reads a generated file below `root`.
#[allow(clippy::missing_panics_doc)]
pub fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
}
