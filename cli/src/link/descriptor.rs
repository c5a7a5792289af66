//! # Link File Descriptor
//!
//! File: cli/src/link/descriptor.rs
//!
//! ## Overview
//!
//! `LinkFileDescriptor` is the unit of work handed to `LinkFileWriter::write`:
//! where the link file goes, what it contains, and the two flags that steer the
//! write (`override_existing`, `auto_generated_message`). The source path and
//! component id are carried for log output only.
//!
//! The descriptor is immutable. It is assembled in one go through
//! `LinkFileDescriptorBuilder` and consumed by value by the writer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let descriptor = LinkFileDescriptor::builder("dist/index.js", "export * from './a';")
//!     .override_existing(false)
//!     .component_id("ui/button@1.0.0")
//!     .build();
//! ```
//!
use std::path::{Path, PathBuf};

/// A single link file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFileDescriptor {
    path: PathBuf,
    base: PathBuf,
    content: Vec<u8>,
    override_existing: bool,
    auto_generated_message: bool,
    source_path: Option<String>,
    component_id: Option<String>,
}

impl LinkFileDescriptor {
    /// Starts a descriptor with the two required fields.
    pub fn builder(
        path: impl Into<PathBuf>,
        content: impl Into<Vec<u8>>,
    ) -> LinkFileDescriptorBuilder {
        LinkFileDescriptorBuilder {
            path: path.into(),
            content: content.into(),
            base: None,
            override_existing: false,
            auto_generated_message: true,
            source_path: None,
            component_id: None,
        }
    }

    /// Destination of the write.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Logical root used for relative-path bookkeeping.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Link file body, without any header.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Whether an existing non-generated file may be overwritten.
    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Whether the generated-file header is prepended to the content.
    pub fn auto_generated_message(&self) -> bool {
        self.auto_generated_message
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    pub fn component_id(&self) -> Option<&str> {
        self.component_id.as_deref()
    }

    /// `path` relative to `base`, or `path` itself when no relative form exists.
    pub fn relative_path(&self) -> PathBuf {
        pathdiff::diff_paths(&self.path, &self.base).unwrap_or_else(|| self.path.clone())
    }

    /// Consumes the descriptor, yielding the destination path.
    pub(crate) fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Builder for `LinkFileDescriptor`. Optional fields take their documented defaults.
#[derive(Debug, Clone)]
pub struct LinkFileDescriptorBuilder {
    path: PathBuf,
    content: Vec<u8>,
    base: Option<PathBuf>,
    override_existing: bool,
    auto_generated_message: bool,
    source_path: Option<String>,
    component_id: Option<String>,
}

impl LinkFileDescriptorBuilder {
    /// Sets the logical root. Defaults to the parent directory of the path.
    pub fn base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Allow overwriting a hand-edited file (default `false`).
    pub fn override_existing(mut self, value: bool) -> Self {
        self.override_existing = value;
        self
    }

    /// Prepend the generated-file header (default `true`).
    pub fn auto_generated_message(mut self, value: bool) -> Self {
        self.auto_generated_message = value;
        self
    }

    pub fn source_path(mut self, source: impl Into<String>) -> Self {
        self.source_path = Some(source.into());
        self
    }

    pub fn component_id(mut self, id: impl Into<String>) -> Self {
        self.component_id = Some(id.into());
        self
    }

    pub fn build(self) -> LinkFileDescriptor {
        let base = self.base.unwrap_or_else(|| default_base(&self.path));
        LinkFileDescriptor {
            path: self.path,
            base,
            content: self.content,
            override_existing: self.override_existing,
            auto_generated_message: self.auto_generated_message,
            source_path: self.source_path,
            component_id: self.component_id,
        }
    }
}

/// Parent directory of `path`; `.` for a bare file name.
fn default_base(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let d = LinkFileDescriptor::builder("dist/index.js", "export * from './a';").build();
        assert_eq!(d.path(), Path::new("dist/index.js"));
        assert_eq!(d.base(), Path::new("dist"));
        assert_eq!(d.content(), b"export * from './a';");
        assert!(!d.override_existing());
        assert!(d.auto_generated_message());
        assert!(d.source_path().is_none());
        assert!(d.component_id().is_none());
    }

    #[test]
    fn test_bare_file_name_defaults_base_to_current_dir() {
        let d = LinkFileDescriptor::builder("index.js", "x").build();
        assert_eq!(d.base(), Path::new("."));
    }

    #[test]
    fn test_builder_sets_every_field() {
        let d = LinkFileDescriptor::builder("/proj/node_modules/a/index.js", vec![1u8, 2, 3])
            .base("/proj")
            .override_existing(true)
            .auto_generated_message(false)
            .source_path("components/a/index.js")
            .component_id("scope/a@0.0.1")
            .build();
        assert_eq!(d.base(), Path::new("/proj"));
        assert_eq!(d.content(), &[1, 2, 3]);
        assert!(d.override_existing());
        assert!(!d.auto_generated_message());
        assert_eq!(d.source_path(), Some("components/a/index.js"));
        assert_eq!(d.component_id(), Some("scope/a@0.0.1"));
    }

    #[test]
    fn test_relative_path() {
        let d = LinkFileDescriptor::builder("/proj/node_modules/a/index.js", "")
            .base("/proj")
            .build();
        assert_eq!(d.relative_path(), PathBuf::from("node_modules/a/index.js"));

        let default_base = LinkFileDescriptor::builder("/proj/dist/index.js", "").build();
        assert_eq!(default_base.relative_path(), PathBuf::from("index.js"));
    }
}
