//! # Linkstamp Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Linkstamp. The link file
//! writer reports typed failures so that a calling pipeline can react to each
//! case (e.g. surface a symlink collision to the user), while configuration
//! loading and command handlers use `anyhow` for flexible context chaining.
//!
//! ## Architecture
//!
//! The error system consists of three items:
//! - `LinkFileError`: A `thiserror` enum covering every failure the writer can report
//! - `WriteResult<T>`: `Result<T, LinkFileError>`, returned by the writer and markers
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for application-level code
//!
//! Every filesystem variant carries the destination path and keeps the
//! underlying `std::io::Error` as its source.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match writer.write(descriptor).await {
//!     Ok(path) => println!("wrote {}", path.display()),
//!     Err(LinkFileError::SymlinkCollision { path }) => {
//!         eprintln!("remove the symlink at {} and retry", path.display());
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the link file writer and its configuration.
#[derive(Error, Debug)]
pub enum LinkFileError {
    /// The destination is a symbolic link. Never followed, never replaced.
    #[error("fatal: trying to write a link file into a symlink file at \"{}\"", path.display())]
    SymlinkCollision { path: PathBuf },

    /// The destination was a directory and it could not be replaced by the link file.
    #[error("failed to replace directory at \"{}\" with a link file: {source}", path.display())]
    DirectoryReplaceFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other failure while writing the link file.
    #[error("failed to write link file at \"{}\": {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing file could not be read to look for the generated-file stamp.
    #[error("failed to read existing file at \"{}\": {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stat of the destination failed for a reason other than "not found".
    /// Only reported under the strict probe policy.
    #[error("failed to stat \"{}\": {source}", path.display())]
    ProbeFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid generated-file markers: {0}")]
    InvalidMarkers(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinkFileError {
    /// Destination path involved in the failure, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::SymlinkCollision { path }
            | Self::DirectoryReplaceFailure { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::ReadFailure { path, .. }
            | Self::ProbeFailure { path, .. } => Some(path),
            Self::InvalidMarkers(_) | Self::Config(_) => None,
        }
    }
}

/// Result type returned by the link file writer.
pub type WriteResult<T> = std::result::Result<T, LinkFileError>;

/// Type alias for Result using anyhow::Error for application-level code.
pub type Result<T> = anyhow::Result<T>;
