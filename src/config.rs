//! Optional `graceful.toml` discovery and parsing

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::labeling::SearchOptions;

/// Name of the configuration file looked up from the working directory
pub const CONFIG_FILE: &str = "graceful.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    search: Option<SearchSection>,
}

#[derive(Debug, Deserialize, Default)]
struct SearchSection {
    max_steps: Option<u64>,
}

/// Resolved settings for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// File the settings came from, if any
    pub source: Option<PathBuf>,
    pub search: SearchOptions,
}

impl Config {
    /// Look for `graceful.toml` in `start` or any of its parents.
    ///
    /// No file means default settings.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_file(start) {
            Some(path) => Self::load(&path),
            None => {
                debug!(start = %start.display(), "no {CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::parse(&content).map_err(|source| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let search = file.search.unwrap_or_default();
        Ok(Self {
            source: None,
            search: SearchOptions {
                max_steps: search.max_steps,
            },
        })
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
