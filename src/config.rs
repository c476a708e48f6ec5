//! Configuration file support for rowpick.
//!
//! Configuration is loaded from `~/.config/rowpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/rowpick/config.toml
//! wrap = false
//! log = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable overriding the `wrap` setting
pub const WRAP_ENV: &str = "ROWPICK_WRAP";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Wrap around the ends of the list when moving the selection
    pub wrap: Option<bool>,

    /// Write a log file for each run
    pub log: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    /// Environment variables are applied over the file values.
    pub fn load() -> Self {
        Self::load_file().with_env(std::env::var(WRAP_ENV).ok().as_deref())
    }

    fn load_file() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rowpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, wrap: Option<bool>, log: Option<bool>) -> Self {
        if wrap.is_some() {
            self.wrap = wrap;
        }
        if log.is_some() {
            self.log = log;
        }
        self
    }

    /// Apply the `ROWPICK_WRAP` value over the file value.
    ///
    /// Unparseable values are ignored.
    pub fn with_env(mut self, wrap: Option<&str>) -> Self {
        if let Some(wrap) = wrap.and_then(parse_bool) {
            self.wrap = Some(wrap);
        }
        self
    }

    /// Whether navigation wraps, defaulting to true.
    pub fn wrap(&self) -> bool {
        self.wrap.unwrap_or(true)
    }

    /// Whether a log file should be written.
    pub fn log_enabled(&self) -> bool {
        self.log.unwrap_or(false)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
