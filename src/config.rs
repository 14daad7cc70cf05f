//!
//! This module defines configuration structures and loading logic for reflow.
//! Configuration lives in a TOML file (`.reflow.toml` or `reflow.toml`) that is
//! either passed explicitly or discovered by walking up from a directory.

use crate::types::WrapWidth;
use crate::utils::text_reflow::ReflowOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration file names, in lookup order
pub const CONFIG_FILE_NAMES: &[&str] = &[".reflow.toml", "reflow.toml"];

/// Upward traversal limit when discovering a configuration file
const MAX_DISCOVERY_DEPTH: usize = 100;

/// Represents the complete configuration loaded from reflow.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(description = "reflow configuration for filling paragraphs to a fixed width.")]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Target line width for filled paragraphs, prefixes included
    #[serde(alias = "wrap_width", alias = "line-length", alias = "line_length")]
    pub wrap_width: WrapWidth,

    /// Move the cursor back to its approximate position after a reflow
    #[serde(alias = "restore_cursor")]
    pub restore_cursor: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            wrap_width: WrapWidth::default(),
            restore_cursor: true,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

impl Config {
    /// Parse configuration from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{origin}: {e}")))
    }

    /// Load configuration from an explicit path, or the defaults when `None`
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = config_path else {
            log::debug!("[reflow-config] No config path given, using defaults");
            return Ok(Self::default());
        };

        let path_str = path.display().to_string();
        log::debug!("[reflow-config] Loading config file: {path_str}");
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            source: e,
            path: path_str.clone(),
        })?;
        Self::from_toml_str(&content, &path_str)
    }

    /// Discover and load the nearest configuration file above `start_dir`.
    ///
    /// Falls back to the defaults when no file is found.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start_dir) {
            Some(path) => Self::load(Some(&path)),
            None => {
                log::debug!("[reflow-config] No configuration file found via upward traversal");
                Ok(Self::default())
            }
        }
    }

    /// Reflow options described by this configuration
    pub fn reflow_options(&self) -> ReflowOptions {
        ReflowOptions {
            wrap_width: self.global.wrap_width,
            restore_cursor: self.global.restore_cursor,
        }
    }
}

/// Find the nearest configuration file, searching `start_dir` and its
/// ancestors. The search stops at a directory containing `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    for _ in 0..MAX_DISCOVERY_DEPTH {
        log::debug!("[reflow-config] Searching for config in: {}", current.display());
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                log::debug!("[reflow-config] Found config file: {}", candidate.display());
                return Some(candidate);
            }
        }

        if current.join(".git").exists() {
            log::debug!("[reflow-config] Stopping at .git directory");
            return None;
        }

        if !current.pop() {
            log::debug!("[reflow-config] Reached filesystem root");
            return None;
        }
    }

    log::debug!("[reflow-config] Maximum traversal depth reached");
    None
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    let default_config = r#"# reflow configuration file

[global]
# Target line width for filled paragraphs, prefixes included (default: 80)
wrap-width = 80

# Move the cursor back to its approximate position after a reflow (default: true)
restore-cursor = true
"#;

    fs::write(path, default_config).map_err(|err| ConfigError::IoError {
        source: err,
        path: path.display().to_string(),
    })
}
