//! # Linkstamp CLI Write Integration Tests
//!
//! File: cli/tests/write.rs
//!
//! ## Overview
//!
//! End-to-end behavior of `linkstamp write`: fresh writes, preserved
//! hand-edited files, override, header toggling, symlink refusal, directory
//! replacement, and configuration-driven markers and policies.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const CONTENT: &str = "export * from './a';";

#[test]
fn test_write_creates_file_with_header() {
    let dir = tempdir().unwrap();

    linkstamp_in(dir.path())
        .args(["write", "dist/index.js", "--content", CONTENT])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("created: "));

    let written = fs::read_to_string(dir.path().join("dist/index.js")).unwrap();
    assert_eq!(written, format!("{}{}", DEFAULT_HEADER, CONTENT));
}

#[test]
fn test_write_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.js");

    for _ in 0..2 {
        linkstamp_in(dir.path())
            .args(["write", "index.js", "--content", CONTENT])
            .assert()
            .success();
    }
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}{}", DEFAULT_HEADER, CONTENT)
    );
}

#[test]
fn test_write_skips_hand_edited_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.js");
    fs::write(&path, "module.exports = require('./custom');\n").unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("skipped: "));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "module.exports = require('./custom');\n"
    );
}

#[test]
fn test_write_override_replaces_hand_edited_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.js");
    fs::write(&path, "hand written").unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT, "--override"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("overwritten: "));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}{}", DEFAULT_HEADER, CONTENT)
    );
}

#[test]
fn test_write_no_header_writes_content_verbatim() {
    let dir = tempdir().unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT, "--no-header"])
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("index.js")).unwrap(), CONTENT.as_bytes());
}

#[test]
fn test_write_reads_content_from_stdin() {
    let dir = tempdir().unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--component", "ui/button"])
        .write_stdin(CONTENT)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("index.js")).unwrap(),
        format!("{}{}", DEFAULT_HEADER, CONTENT)
    );
}

#[cfg(unix)]
#[test]
fn test_write_refuses_symlink() {
    let dir = tempdir().unwrap();
    let link = dir.path().join("index.js");
    std::os::unix::fs::symlink(dir.path().join("elsewhere.js"), &link).unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT, "--override"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("symlink file at").and(predicate::str::contains("index.js")));

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(!dir.path().join("elsewhere.js").exists());
}

#[test]
fn test_write_replaces_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.js");
    fs::create_dir_all(path.join("inner")).unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("replaced directory: "));

    assert!(path.is_file());
}

#[test]
fn test_write_refuses_directory_when_configured() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("linkstamp.toml"), "[directories]\nreplace = false\n").unwrap();
    let path = dir.path().join("index.js");
    fs::create_dir(&path).unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to replace directory"));

    assert!(path.is_dir());
}

#[test]
fn test_write_uses_configured_markers() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("linkstamp.toml"),
        "[markers]\nstamp = \"MY-GEN\"\nheader = \"// MY-GEN\\n\"\n",
    )
    .unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content", CONTENT])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("index.js")).unwrap(),
        format!("// MY-GEN\n{}", CONTENT)
    );
}

#[test]
fn test_write_missing_content_file_fails() {
    let dir = tempdir().unwrap();

    linkstamp_in(dir.path())
        .args(["write", "index.js", "--content-file", "missing.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read content file"));

    assert!(!dir.path().join("index.js").exists());
}
