//! # Linkstamp CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`write.rs`, `inspect.rs`,
//! `main_tests.rs`). Each `.rs` file in `cli/tests/` is compiled as its own test
//! crate and runs the compiled `linkstamp` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Header written by the default configuration.
pub const DEFAULT_HEADER: &str =
    "/* THIS IS A LINKSTAMP-AUTO-GENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY. */\n\n";

/// # Get Linkstamp Command (`linkstamp_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `linkstamp` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn linkstamp_cmd() -> Command {
    Command::cargo_bin("linkstamp").expect("Failed to find linkstamp binary for testing")
}

/// # Hermetic Linkstamp Command (`linkstamp_in`)
///
/// Runs the binary inside `dir` with an explicit configuration file, so no
/// user or project configuration on the host leaks into the test. The config
/// file is created empty (all defaults) unless it already exists.
pub fn linkstamp_in(dir: &Path) -> Command {
    let config = dir.join("linkstamp.toml");
    if !config.exists() {
        std::fs::write(&config, "").expect("Failed to write test config");
    }
    let mut cmd = linkstamp_cmd();
    cmd.current_dir(dir).arg("--config").arg(&config);
    cmd
}
