use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::AppError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/recommend";
pub const DEFAULT_SPEECH_LOCALE: &str = "ko-KR";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const ENDPOINT_ENV: &str = "MOODSYNC_ENDPOINT";

pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodsync")
}

pub fn get_config_file_path() -> PathBuf {
    get_config_dir().join("config.json")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Full URL of the recommendation endpoint
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Locale handed to the host speech recognizer
    pub speech_locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECONDS,
            speech_locale: DEFAULT_SPEECH_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the user config file (if any) and applies the environment override.
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_from(&get_config_file_path())?;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.apply_endpoint(&endpoint);
        }
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Ignores blank overrides so an empty env var does not wipe the endpoint.
    pub fn apply_endpoint(&mut self, endpoint: &str) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
    }
}
