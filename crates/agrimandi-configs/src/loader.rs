//! Configuration loading, environment overrides, and validation.

use std::fs;
use std::path::Path;

use crate::types::ServerConfig;

impl ServerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Environment overrides are applied separately via
    /// `apply_env_overrides()`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `AGRIMANDI_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("AGRIMANDI_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Ok(path) = std::env::var("AGRIMANDI_DATA_PATH") {
            self.storage.data_path = path;
        }
        if let Ok(port) = std::env::var("AGRIMANDI_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    /// Validates configuration settings.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        if self.storage.data_path.trim().is_empty() {
            return Err(anyhow::anyhow!("storage.data_path cannot be empty"));
        }

        if self.auth.trusted_issuers.is_empty() {
            return Err(anyhow::anyhow!("auth.trusted_issuers cannot be empty"));
        }

        Ok(())
    }
}
