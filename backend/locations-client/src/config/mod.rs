use crate::API_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const BASE_URL_ENV_KEY: &str = "LOCATIONS_API_URL";
const TOKEN_ENV_KEY: &str = "LOCATIONS_API_TOKEN";

/// Immutable client configuration: where the API lives and which token
/// to present. Constructed once at application start and handed to
/// [`crate::LocationsClient::from_config`].
///
/// The token deliberately has no default. The original application
/// shipped it hardcoded in source; here it must arrive through
/// `config.json` or the `LOCATIONS_API_TOKEN` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
        }
    }
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

impl ClientConfig {
    /// Load config from `{config_dir}/config.json`, then apply
    /// environment overrides.
    ///
    /// Falls back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if the file exists but cannot be read
    /// or parsed, or if the resulting base URL is invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        // Picks up a local .env in development; absence is fine.
        dotenvy::dotenv().ok();

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                warn!("Failed to read config file: {}", e);
                ConfigError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    source: e,
                }
            })?;

            let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
                warn!("Failed to parse config JSON: {}", e);
                ConfigError::ParseError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    reason: e.to_string(),
                }
            })?;

            info!("Config loaded from {}", config_path.display());
            config
        } else {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Environment wins over the file so deployments can repoint the
    /// client without touching `config.json`.
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_KEY) {
            info!("Base URL overridden via {}", BASE_URL_ENV_KEY);
            self.base_url = base_url;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV_KEY) {
            self.token = token;
        }
    }

    /// Validate the base URL shape. The token is checked separately at
    /// client construction, so a tokenless default config still loads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the base URL is empty
    /// or not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "base_url cannot be empty".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base URL format: {}", self.base_url),
            });
        }

        Ok(())
    }
}

/// Default location for `config.json`: `{platform config dir}/locations-client`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("locations-client"))
}
