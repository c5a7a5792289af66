//! # Linkstamp Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each subcommand of the `linkstamp` binary lives in its own module with an
//! arguments struct (clap derive) and an async handler. Handlers receive the
//! `LinkFileWriter` built once from the loaded configuration in `main.rs`.
//!

/// `linkstamp write`: write one link file.
pub mod write;
/// `linkstamp inspect`: classify a destination without writing.
pub mod inspect;
