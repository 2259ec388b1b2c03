use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EbumpError, Result};

/// Configuration file name looked up in the project root
pub const CONFIG_FILE: &str = "ebump.toml";

/// Represents the complete configuration for ebump.
///
/// Holds the version pattern, the currently persisted version string, and the
/// additional files whose version occurrences should be rewritten on bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_pattern")]
    pub pattern: String,

    pub current_version: String,

    /// Files (relative to the project root) that also carry the version string
    #[serde(default)]
    pub files: Vec<String>,
}

/// Returns the default version pattern.
fn default_pattern() -> String {
    "MAJOR.MINOR.PATCH[-TAGNUM]".to_string()
}

impl Config {
    /// Minimal configuration for a version string with the default pattern
    pub fn new(current_version: impl Into<String>) -> Self {
        Config {
            pattern: default_pattern(),
            current_version: current_version.into(),
            files: Vec::new(),
        }
    }
}

/// Loads configuration from file.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `ebump.toml` in the current directory (the project root)
/// 3. `ebump.toml` in the user config directory
///
/// Unlike tools that can fall back to defaults, ebump has no meaningful
/// default for `current_version`, so a missing config file is an error.
///
/// # Returns
/// * `Ok((Config, PathBuf))` - Loaded configuration and the path it came from
/// * `Err` - If no file is found, or a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<(Config, PathBuf)> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE).exists() {
        PathBuf::from(CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join(CONFIG_FILE);
        if candidate.exists() {
            candidate
        } else {
            return Err(EbumpError::config(format!(
                "no {} found in the project root or user config directory",
                CONFIG_FILE
            )));
        }
    } else {
        return Err(EbumpError::config(format!(
            "no {} found in the project root",
            CONFIG_FILE
        )));
    };

    let config_str = fs::read_to_string(&path)
        .map_err(|e| EbumpError::config(format!("cannot read '{}': {}", path.display(), e)))?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| EbumpError::config(format!("cannot parse '{}': {}", path.display(), e)))?;
    Ok((config, path))
}
