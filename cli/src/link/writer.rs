//! # Link File Writer
//!
//! File: cli/src/link/writer.rs
//!
//! ## Overview
//!
//! `LinkFileWriter` writes one generated link file to disk while coexisting with
//! whatever a user may already have at the same path. It decides, per call,
//! whether to write at all:
//!
//! 1. **Probe** the destination with `lstat` (symlinks are not followed).
//! 2. **Existing entry policy**:
//!     - a symlink is a hard error (`SymlinkCollision`), whatever `override_existing` says;
//!     - without `override_existing`, a regular file that lacks the stamp is
//!       hand-authored and is left untouched (the call succeeds as a skip);
//!     - a file that carries the stamp is previous output and gets overwritten.
//! 3. **Compose** the payload: header + content, or the content alone.
//! 4. **Write**, creating parent directories. If the destination turns out to be
//!    a directory, remove it and retry once.
//!
//! Probe-then-write is not atomic. Callers must not run two writes for the same
//! path concurrently; writes to distinct paths are independent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let writer = LinkFileWriter::new(Markers::default());
//! let descriptor = LinkFileDescriptor::builder("dist/index.js", "export * from './a';").build();
//! let path = writer.write(descriptor).await?;
//! ```
//!
use crate::common::fs::io::{read_file_lossy, remove_dir_tree, write_bytes_to_file};
use crate::core::error::{LinkFileError, WriteResult};
use crate::link::descriptor::LinkFileDescriptor;
use crate::link::markers::Markers;
use crate::link::probe::{probe, Probe};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What to do when the destination cannot be stat'ed for a reason other than "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbePolicy {
    /// Treat the destination as absent and attempt the write.
    #[default]
    Permissive,
    /// Fail with `LinkFileError::ProbeFailure`.
    Strict,
}

/// What to do when the destination is a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryPolicy {
    /// Remove the directory tree and write the link file in its place.
    #[default]
    Replace,
    /// Leave the directory alone and fail with `LinkFileError::DirectoryReplaceFailure`.
    Refuse,
}

/// Which branch a successful write took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Nothing existed at the destination.
    Created,
    /// A previous generated file (or any file, under override) was replaced.
    Overwritten,
    /// A hand-authored file was found and preserved.
    Skipped,
    /// A directory stood at the destination and was replaced by the link file.
    ReplacedDirectory,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped => "skipped",
            Self::ReplacedDirectory => "replaced directory",
        };
        f.write_str(label)
    }
}

/// Result of `LinkFileWriter::write_detailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub action: WriteAction,
}

/// Classification of whatever currently sits at a destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    Symlink,
    Directory,
    /// A file carrying the generated-file stamp.
    Generated,
    /// A file (or other non-directory entry) without the stamp.
    Foreign,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Missing => "missing",
            Self::Symlink => "symlink",
            Self::Directory => "directory",
            Self::Generated => "generated",
            Self::Foreign => "foreign",
        };
        f.write_str(label)
    }
}

/// Writes link files. Immutable once built, so one writer can serve many calls.
#[derive(Debug, Clone, Default)]
pub struct LinkFileWriter {
    markers: Markers,
    probe_policy: ProbePolicy,
    directory_policy: DirectoryPolicy,
}

impl LinkFileWriter {
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            probe_policy: ProbePolicy::default(),
            directory_policy: DirectoryPolicy::default(),
        }
    }

    pub fn with_probe_policy(mut self, policy: ProbePolicy) -> Self {
        self.probe_policy = policy;
        self
    }

    pub fn with_directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directory_policy = policy;
        self
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn probe_policy(&self) -> ProbePolicy {
        self.probe_policy
    }

    pub fn directory_policy(&self) -> DirectoryPolicy {
        self.directory_policy
    }

    /// Bytes that would be written for `descriptor`.
    pub fn compose(&self, descriptor: &LinkFileDescriptor) -> Vec<u8> {
        if !descriptor.auto_generated_message() {
            return descriptor.content().to_vec();
        }
        let header = self.markers.header().as_bytes();
        let mut payload = Vec::with_capacity(header.len() + descriptor.content().len());
        payload.extend_from_slice(header);
        payload.extend_from_slice(descriptor.content());
        payload
    }

    /// Writes the link file and returns its path.
    ///
    /// A preserved hand-authored file also counts as success; use
    /// `write_detailed` to tell the cases apart.
    ///
    /// # Errors
    ///
    /// - `SymlinkCollision` if the destination is a symlink.
    /// - `ReadFailure` if an existing file could not be read for the stamp check.
    /// - `ProbeFailure` under `ProbePolicy::Strict` when the stat fails.
    /// - `DirectoryReplaceFailure` if a directory at the destination could not be replaced.
    /// - `WriteFailure` for any other write error.
    pub async fn write(&self, descriptor: LinkFileDescriptor) -> WriteResult<PathBuf> {
        self.write_detailed(descriptor)
            .await
            .map(|outcome| outcome.path)
    }

    /// Same as `write`, reporting which branch was taken.
    pub async fn write_detailed(&self, descriptor: LinkFileDescriptor) -> WriteResult<WriteOutcome> {
        let path = descriptor.path();

        // 1. Probe.
        let existed = match probe(path).await {
            Probe::NotFound => false,
            Probe::Failed(source) => match self.probe_policy {
                ProbePolicy::Permissive => {
                    debug!(
                        "Could not stat {:?} ({}), treating it as absent",
                        path, source
                    );
                    false
                }
                ProbePolicy::Strict => {
                    return Err(LinkFileError::ProbeFailure {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            },
            // 2. Existing entry policy.
            Probe::Exists(meta) => {
                let file_type = meta.file_type();
                if file_type.is_symlink() {
                    return Err(LinkFileError::SymlinkCollision {
                        path: path.to_path_buf(),
                    });
                }
                // Directories are never inspected; the write below hits the
                // directory-conflict path instead.
                if !descriptor.override_existing()
                    && !file_type.is_dir()
                    && !self.is_generated_file(path, file_type.is_file()).await?
                {
                    debug!(
                        source = descriptor.source_path(),
                        component = descriptor.component_id(),
                        "Existing file {:?} is not generated, leaving it untouched",
                        path
                    );
                    return Ok(WriteOutcome {
                        path: descriptor.into_path(),
                        action: WriteAction::Skipped,
                    });
                }
                true
            }
        };

        // 3. Compose.
        let payload = self.compose(&descriptor);

        // 4. Write.
        let action = match write_bytes_to_file(path, &payload).await {
            Ok(()) if existed => WriteAction::Overwritten,
            Ok(()) => WriteAction::Created,
            Err(source) => {
                if !is_directory_conflict(&source, path).await {
                    return Err(LinkFileError::WriteFailure {
                        path: path.to_path_buf(),
                        source,
                    });
                }
                self.replace_directory(&descriptor, &payload, source).await?;
                WriteAction::ReplacedDirectory
            }
        };

        info!(
            source = descriptor.source_path(),
            component = descriptor.component_id(),
            "Link file {}: {:?}",
            action,
            descriptor.relative_path()
        );
        Ok(WriteOutcome {
            path: descriptor.into_path(),
            action,
        })
    }

    /// Classifies the destination without writing anything.
    pub async fn inspect(&self, path: &Path) -> WriteResult<EntryKind> {
        match probe(path).await {
            Probe::NotFound => Ok(EntryKind::Missing),
            Probe::Failed(source) => match self.probe_policy {
                ProbePolicy::Permissive => {
                    debug!("Could not stat {:?} ({}), reporting it as missing", path, source);
                    Ok(EntryKind::Missing)
                }
                ProbePolicy::Strict => Err(LinkFileError::ProbeFailure {
                    path: path.to_path_buf(),
                    source,
                }),
            },
            Probe::Exists(meta) => {
                let file_type = meta.file_type();
                if file_type.is_symlink() {
                    Ok(EntryKind::Symlink)
                } else if file_type.is_dir() {
                    Ok(EntryKind::Directory)
                } else if self.is_generated_file(path, file_type.is_file()).await? {
                    Ok(EntryKind::Generated)
                } else {
                    Ok(EntryKind::Foreign)
                }
            }
        }
    }

    /// Reads a regular file and looks for the stamp. Special files (fifos,
    /// sockets, devices) are never read and count as foreign.
    async fn is_generated_file(&self, path: &Path, is_regular: bool) -> WriteResult<bool> {
        if !is_regular {
            return Ok(false);
        }
        let existing = read_file_lossy(path)
            .await
            .map_err(|source| LinkFileError::ReadFailure {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.markers.is_generated(&existing))
    }

    /// Removes the directory at the destination and retries the write once.
    async fn replace_directory(
        &self,
        descriptor: &LinkFileDescriptor,
        payload: &[u8],
        original: io::Error,
    ) -> WriteResult<()> {
        let path = descriptor.path();
        let failure = |source: io::Error| LinkFileError::DirectoryReplaceFailure {
            path: path.to_path_buf(),
            source,
        };

        if self.directory_policy == DirectoryPolicy::Refuse {
            warn!("Refusing to replace directory {:?} with a link file", path);
            return Err(failure(original));
        }

        debug!(
            source = descriptor.source_path(),
            component = descriptor.component_id(),
            "deleting a directory {:?} in order to write a link file with the same name",
            path
        );
        remove_dir_tree(path).await.map_err(failure)?;
        write_bytes_to_file(path, payload).await.map_err(failure)
    }
}

/// True when a failed write was caused by a directory at `path`.
///
/// Not every platform reports `IsADirectory`, so fall back to a fresh `lstat`.
async fn is_directory_conflict(err: &io::Error, path: &Path) -> bool {
    err.kind() == io::ErrorKind::IsADirectory || probe(path).await.is_dir()
}
