//! Configuration management for Answer Finder
//!
//! Holds the compile-time defaults and an optional JSON configuration file
//! stored in the user's configuration directory. The answers directory,
//! file extension and sentinel token are passed from here into the lister
//! and loader at construction.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.cosmic.AnswerFinder";

/// Name of the configuration file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default answers directory, relative to the working directory
pub const DEFAULT_ANSWERS_DIR: &str = "Answers";

/// Extension an entry must end with to be listed
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Line token marking the end of meaningful content
pub const DEFAULT_SENTINEL: &str = "end";

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Minimum window width in pixels
pub const MIN_WINDOW_WIDTH: f32 = 600.0;

/// Minimum window height in pixels
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Window background fill (#351a5c)
pub const BACKGROUND_RGB: [u8; 3] = [0x35, 0x1a, 0x5c];

/// Seconds the fatal startup message stays up before the app quits
pub const DEFAULT_FATAL_EXIT_DELAY: u64 = 5;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Answers directory configuration
    pub answers: AnswersConfig,

    /// Window configuration
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from the user's configuration directory,
    /// falling back to defaults when no file exists
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No configuration file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific JSON file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }
}

/// Answers directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersConfig {
    /// Directory holding the answer files. Relative paths are resolved
    /// against the process working directory.
    pub directory: PathBuf,

    /// Extension (including the dot) an answer file name must end with
    pub extension: String,

    /// Sentinel token filtered out of displayed content
    pub sentinel: String,
}

impl Default for AnswersConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_ANSWERS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl AnswersConfig {
    /// Resolve the answers directory against a working directory
    pub fn resolve(&mut self, working_dir: &Path) {
        if self.directory.is_relative() {
            self.directory = working_dir.join(&self.directory);
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,

    /// Delay before quitting after a fatal startup error, in seconds
    pub fatal_exit_delay: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            fatal_exit_delay: DEFAULT_FATAL_EXIT_DELAY,
        }
    }
}
