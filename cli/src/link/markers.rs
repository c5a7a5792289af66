//! # Generated-File Markers
//!
//! File: cli/src/link/markers.rs
//!
//! ## Overview
//!
//! A link file written by Linkstamp carries a short **stamp** inside a longer
//! **header** that is prepended to the content. On the next write, the stamp is
//! how the writer tells its own previous output apart from a hand-edited file
//! at the same path.
//!
//! `Markers` bundles both strings into one validated value that is injected into
//! `LinkFileWriter`, so tests (or projects) can use their own markers.
//!
use crate::core::error::{LinkFileError, WriteResult};

/// Stamp embedded in every generated header.
pub const DEFAULT_STAMP: &str = "LINKSTAMP-AUTO-GENERATED";

/// Header prepended to link file content when the auto-generated message is enabled.
pub const DEFAULT_HEADER: &str =
    "/* THIS IS A LINKSTAMP-AUTO-GENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY. */\n\n";

/// Stamp and header pair used to recognize and produce generated files.
///
/// The header always contains the stamp; `Markers::new` rejects anything else,
/// otherwise a file written with the header would look foreign on the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    stamp: String,
    header: String,
}

impl Markers {
    /// Builds a validated marker pair.
    ///
    /// # Errors
    ///
    /// Returns `LinkFileError::InvalidMarkers` if the stamp is empty or the
    /// header does not contain the stamp.
    pub fn new(stamp: impl Into<String>, header: impl Into<String>) -> WriteResult<Self> {
        let stamp = stamp.into();
        let header = header.into();
        if stamp.is_empty() {
            return Err(LinkFileError::InvalidMarkers(
                "stamp must not be empty".to_string(),
            ));
        }
        if !header.contains(&stamp) {
            return Err(LinkFileError::InvalidMarkers(format!(
                "header must contain the stamp '{}'",
                stamp
            )));
        }
        Ok(Self { stamp, header })
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// True when `content` carries the stamp anywhere.
    pub fn is_generated(&self, content: &str) -> bool {
        content.contains(&self.stamp)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            stamp: DEFAULT_STAMP.to_string(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}
