//! # Linkstamp
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Linkstamp writes generated "link files" (small re-export stubs and similar
//! artifacts produced by a component-linking tool) to disk, idempotently, while
//! leaving hand-edited files at the same path alone. Generated files carry a
//! stamp inside a header; a file without the stamp is never overwritten unless
//! the caller asks for it, and a symlink is never overwritten at all.
//!
//! ## Architecture
//!
//! - `link`: descriptor, markers, probe and the `LinkFileWriter` itself
//! - `core`: configuration and error types
//! - `common`: filesystem helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linkstamp::link::{LinkFileDescriptor, LinkFileWriter, Markers};
//!
//! # async fn run() -> Result<(), linkstamp::core::error::LinkFileError> {
//! let writer = LinkFileWriter::new(Markers::default());
//! let descriptor = LinkFileDescriptor::builder("dist/index.js", "export * from './a';")
//!     .component_id("ui/button")
//!     .build();
//! let path = writer.write(descriptor).await?;
//! println!("link file at {}", path.display());
//! # Ok(())
//! # }
//! ```
//!

pub mod common;
pub mod core;
pub mod link;

pub use crate::core::error::LinkFileError;
pub use crate::link::{LinkFileDescriptor, LinkFileWriter, Markers};
