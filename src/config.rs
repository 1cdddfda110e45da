//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Studio defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// Gemini API key.
    pub gemini: Option<String>,
}

/// Default studio parameters from the config file.
#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    /// Default model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Default output format.
    #[serde(default = "default_format")]
    pub format: String,
    /// Free credits at session start.
    #[serde(default = "default_starting_credits")]
    pub starting_credits: u32,
    /// Cost of one image in credits.
    #[serde(default = "default_cost_per_image")]
    pub cost_per_image: u32,
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_starting_credits() -> u32 {
    crate::session::STARTING_CREDITS
}

fn default_cost_per_image() -> u32 {
    crate::session::COST_PER_IMAGE
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            format: default_format(),
            starting_credits: default_starting_credits(),
            cost_per_image: default_cost_per_image(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the Gemini API key, preferring the environment variable.
    #[must_use]
    pub fn gemini_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY").ok().or_else(|| self.keys.gemini.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `IMGSTUDIO_CONFIG` environment variable
/// 3. `~/.config/imgstudio/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("IMGSTUDIO_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/imgstudio/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/imgstudio/config.toml")
    } else {
        PathBuf::from("imgstudio.toml")
    }
}
