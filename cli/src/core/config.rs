//! # Linkstamp Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration that shapes a
//! `LinkFileWriter`: the generated-file markers, the probe policy and the
//! directory-conflict policy.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (used on its own)
//! 2. Project-specific `.linkstamp.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! A project value wins over the user value whenever it differs from the
//! built-in default. The merged result is validated before use; in particular
//! the header must contain the stamp.
//!
//! ## Examples
//!
//! ```toml
//! [markers]
//! stamp = "MY-TOOL-GENERATED"
//! header = "// MY-TOOL-GENERATED: do not edit\n"
//!
//! [probe]
//! strict = true
//!
//! [directories]
//! replace = false
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let writer = cfg.writer()?;
//! ```
//!
use crate::core::error::{LinkFileError, Result};
use crate::link::markers::{Markers, DEFAULT_HEADER, DEFAULT_STAMP};
use crate::link::writer::{DirectoryPolicy, LinkFileWriter, ProbePolicy};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub directories: DirectoriesConfig,
}

/// Stamp and header written into generated link files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MarkersConfig {
    /// Substring that identifies a generated file.
    #[serde(default = "default_stamp")]
    pub stamp: String,
    /// Text prepended to link file content. Must contain `stamp`.
    #[serde(default = "default_header")]
    pub header: String,
}

/// How stat failures on the destination are handled.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Fail on stat errors other than "not found" instead of treating the
    /// destination as absent (defaults to false).
    #[serde(default)]
    pub strict: bool,
}

/// How a directory standing at the destination is handled.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DirectoriesConfig {
    /// Remove the directory and write the link file in its place (defaults to true).
    #[serde(default = "default_replace_directories")]
    pub replace: bool,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            stamp: default_stamp(),
            header: default_header(),
        }
    }
}

impl Default for DirectoriesConfig {
    fn default() -> Self {
        Self {
            replace: default_replace_directories(),
        }
    }
}

fn default_stamp() -> String {
    DEFAULT_STAMP.to_string()
}
fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}
fn default_replace_directories() -> bool {
    true
}

impl Config {
    /// Validated markers from this configuration.
    pub fn markers(&self) -> Result<Markers> {
        Markers::new(self.markers.stamp.clone(), self.markers.header.clone())
            .map_err(|e| anyhow!(LinkFileError::Config(e.to_string())))
    }

    /// Builds a writer configured from this configuration.
    pub fn writer(&self) -> Result<LinkFileWriter> {
        let probe_policy = if self.probe.strict {
            ProbePolicy::Strict
        } else {
            ProbePolicy::Permissive
        };
        let directory_policy = if self.directories.replace {
            DirectoryPolicy::Replace
        } else {
            DirectoryPolicy::Refuse
        };
        Ok(LinkFileWriter::new(self.markers()?)
            .with_probe_policy(probe_policy)
            .with_directory_policy(directory_policy))
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".linkstamp.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read. Otherwise the user and project
/// files are merged over the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Linkstamp", "linkstamp") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.markers.stamp = if project_cfg.markers.stamp != default_stamp() {
        project_cfg.markers.stamp
    } else {
        user.markers.stamp
    };
    merged.markers.header = if project_cfg.markers.header != default_header() {
        project_cfg.markers.header
    } else {
        user.markers.header
    };
    merged.probe.strict = project_cfg.probe.strict || user.probe.strict;
    merged.directories.replace = if project_cfg.directories.replace != default_replace_directories()
    {
        project_cfg.directories.replace
    } else {
        user.directories.replace
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    config.markers()?;
    if !config.directories.replace {
        info!("Directory replacement disabled; directories at link paths will be reported as errors.");
    }
    Ok(())
}
