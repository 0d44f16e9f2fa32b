use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseBumpError, Result};

/// Represents the complete configuration for release-bump.
///
/// Contains the file layout (manifest path, project root, marker file name)
/// and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default manifest path.
fn default_manifest() -> String {
    "Package.nuspec".to_string()
}

/// Returns the default project root for the marker-file walk.
fn default_project_root() -> String {
    ".".to_string()
}

/// Returns the default marker file name.
fn default_marker_filename() -> String {
    "AssemblyInfo.cs".to_string()
}

/// Configuration for the files release-bump reads and rewrites.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_project_root")]
    pub project_root: String,

    #[serde(default = "default_marker_filename")]
    pub marker_filename: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            project_root: default_project_root(),
            marker_filename: default_marker_filename(),
        }
    }
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of release-bump without affecting version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub skip_release_notes: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasebump.toml` in current directory
/// 3. `~/.config/.releasebump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasebump.toml").exists() {
        fs::read_to_string("./releasebump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasebump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseBumpError::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
