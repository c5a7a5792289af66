//! # Linkstamp Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the writer and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and result aliases
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{LinkFileError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
