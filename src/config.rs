use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::{BumpMapping, DetectionMode};
use crate::error::{BumpError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bump-detect.toml";

/// Represents the optional TOML configuration file.
///
/// ```toml
/// type = "branch"
///
/// [map]
/// major = ["breaking"]
/// minor = ["feature"]
/// patch = ["fix", "bug"]
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default, rename = "type")]
    pub detection_type: Option<String>,

    #[serde(default)]
    pub map: Option<toml::Table>,
}

/// Fully resolved settings for one detection run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: DetectionMode,
    pub mapping: BumpMapping,
}

impl Config {
    pub fn new(mode: DetectionMode, mapping: BumpMapping) -> Self {
        Config { mode, mapping }
    }

    /// Combine explicit inputs (flags or environment) with the config file.
    ///
    /// Explicit inputs win when they are non-blank. The type defaults to
    /// `label`; a mapping is required from one source or the other.
    pub fn resolve(
        type_input: Option<&str>,
        map_input: Option<&str>,
        file: &FileConfig,
    ) -> Result<Self> {
        let type_text = non_blank(type_input).or_else(|| non_blank(file.detection_type.as_deref()));
        let mode = match type_text {
            Some(text) => text.parse::<DetectionMode>()?,
            None => DetectionMode::default(),
        };

        let mapping = match (non_blank(map_input), &file.map) {
            (Some(json), _) => BumpMapping::from_json(json)?,
            (None, Some(table)) => BumpMapping::from_toml_table(table)?,
            (None, None) => return Err(BumpError::config("map is required")),
        };

        Ok(Config { mode, mapping })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loads the configuration file, or returns an empty one.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bump-detect.toml` in current directory
/// 3. `.bump-detect.toml` in user config directory
/// 4. Empty configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or empty configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        read_config(Path::new(path))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        read_config(Path::new(CONFIG_FILE_NAME))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read_config(&config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("invalid configuration file: {}", e)))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!(
            "cannot read configuration file '{}': {}",
            path.display(),
            e
        ))
    })
}
