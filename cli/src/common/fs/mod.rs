//! # Linkstamp Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers used by the link file writer. Everything currently lives
//! in the `io` submodule; import from it directly, e.g.
//! `use crate::common::fs::io::write_bytes_to_file;`.
//!

/// Async file I/O: parent creation, lossy reads, writes, directory removal, `~` expansion.
pub mod io;
