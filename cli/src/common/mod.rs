//! # Linkstamp Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, cross-cutting helpers that are not specific to link files. Keeping
//! them under `common::` separates plumbing from the writer's decision logic
//! (`link::`) and from infrastructure (`core::`).
//!

/// Utilities for filesystem operations.
pub mod fs;
