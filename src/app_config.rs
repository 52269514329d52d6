use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File name of the scene boundary report inside an episode directory
    #[serde(default = "default_scenes_file")]
    pub scenes_file: String,

    /// File name of the subtitle track inside an episode directory
    #[serde(default = "default_subtitles_file")]
    pub subtitles_file: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_scenes_file() -> String {
    "scenes.csv".to_string()
}

fn default_subtitles_file() -> String {
    "subtitles.txt".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.scenes_file.trim().is_empty() {
            return Err(anyhow!("scenes_file must not be empty"));
        }
        if self.subtitles_file.trim().is_empty() {
            return Err(anyhow!("subtitles_file must not be empty"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            scenes_file: default_scenes_file(),
            subtitles_file: default_subtitles_file(),
            log_level: LogLevel::default(),
        }
    }
}
