//! Configuration for ClarityScope.
//!
//! Tool settings (window length, data paths, insight service URL) live
//! in a JSON config file. The productive-application list is the only
//! engine state carried across sessions; it is stored separately as a
//! plain JSON array of strings so the engine itself stays stateless.

use crate::core::types::default_productive_apps;
use crate::core::windowing::DEFAULT_WINDOW_MINUTES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Length of each scoring window
    #[serde(with = "duration_serde")]
    pub window_duration: Duration,

    /// Path for storing the productive-app list and exported reports
    pub data_path: PathBuf,

    /// Base URL of the insight service, if one is configured
    pub insight_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clarity-scope");

        Self {
            window_duration: Duration::from_secs(DEFAULT_WINDOW_MINUTES as u64 * 60),
            data_path: data_dir,
            insight_url: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clarity-scope")
            .join("config.json")
    }

    /// Get the path to the persisted productive-app list.
    pub fn productive_apps_path(&self) -> PathBuf {
        self.data_path.join("productive_apps.json")
    }

    /// Window length as a chrono duration for the scoring pipeline.
    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.window_duration.as_secs() as i64)
    }

    /// Load the persisted productive-app list.
    ///
    /// A missing file yields the default list; an unreadable or
    /// malformed file is an error so the caller can decide what to
    /// fall back to.
    pub fn load_productive_apps(&self) -> Result<Vec<String>, ConfigError> {
        let path = self.productive_apps_path();
        if !path.exists() {
            return Ok(default_productive_apps());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Persist the productive-app list as a JSON array of strings.
    pub fn save_productive_apps(&self, apps: &[String]) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.data_path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let content = serde_json::to_string_pretty(apps)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(self.productive_apps_path(), content)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Serde support for Duration.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
