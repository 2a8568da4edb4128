use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default deepest heading level that receives a visible number.
pub const DEFAULT_SECNOLEVEL: usize = 2;

/// Default number of heading levels tracked by the section counter.
pub const DEFAULT_SECTION_DEPTH: usize = 5;

/// Deepest section counter a config may ask for.
pub const MAX_SECTION_DEPTH: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Book-level settings consulted while indexing chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Headings at this level or shallower get a visible number prefix.
    pub secnolevel: usize,
    /// How many heading levels the section counter tracks.
    pub section_depth: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            secnolevel: DEFAULT_SECNOLEVEL,
            section_depth: DEFAULT_SECTION_DEPTH,
        }
    }
}

impl IndexConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: IndexConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        Ok(Some(config))
    }

    /// Parses a config from TOML text without touching the filesystem.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: IndexConfig =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: PathBuf::from("<inline>"),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.section_depth == 0 {
            return Err(ConfigError::Invalid(
                "section_depth must be at least 1".to_string(),
            ));
        }
        if self.section_depth > MAX_SECTION_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "section_depth must be at most {MAX_SECTION_DEPTH}, got {}",
                self.section_depth
            )));
        }
        Ok(())
    }
}
