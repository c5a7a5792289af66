//! # Destination Probe
//!
//! File: cli/src/link/probe.rs
//!
//! Symlink-aware stat of a link file destination. The result is tagged so the
//! writer can decide, per its `ProbePolicy`, whether a stat failure other than
//! "not found" is fatal or treated as an absent file.
//!
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::fs;

/// Outcome of a symlink-aware stat.
#[derive(Debug)]
pub enum Probe {
    /// Nothing exists at the path.
    NotFound,
    /// Something exists; metadata is from `lstat`, so symlinks are not followed.
    Exists(Metadata),
    /// The stat failed for another reason (permissions, invalid path, ...).
    Failed(io::Error),
}

impl Probe {
    pub fn is_symlink(&self) -> bool {
        matches!(self, Self::Exists(meta) if meta.file_type().is_symlink())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Exists(meta) if meta.file_type().is_dir())
    }
}

/// Stats `path` without following a symlink at the final component.
pub async fn probe(path: &Path) -> Probe {
    match fs::symlink_metadata(path).await {
        Ok(meta) => Probe::Exists(meta),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Probe::NotFound,
        Err(err) => Probe::Failed(err),
    }
}
