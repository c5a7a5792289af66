//! # Link Files (`link`)
//!
//! File: cli/src/link/mod.rs
//!
//! ## Overview
//!
//! Everything needed to put one generated link file on disk:
//!
//! - **`descriptor`**: `LinkFileDescriptor`, the immutable unit of work, and its builder.
//! - **`markers`**: `Markers`, the stamp/header pair that identifies generated files.
//! - **`probe`**: symlink-aware stat with a tagged result.
//! - **`writer`**: `LinkFileWriter`, the write-time decision logic.
//!
//! The commonly used items are re-exported here.
//!

pub mod descriptor;
pub mod markers;
pub mod probe;
pub mod writer;

pub use descriptor::{LinkFileDescriptor, LinkFileDescriptorBuilder};
pub use markers::Markers;
pub use writer::{
    DirectoryPolicy, EntryKind, LinkFileWriter, ProbePolicy, WriteAction, WriteOutcome,
};
