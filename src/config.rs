//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the session token (`JANTRI_API_TOKEN`), which is never read
//! from the config file.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Environment variable holding the platform session token.
pub const TOKEN_ENV_VAR: &str = "JANTRI_API_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
    /// Session token loaded from `JANTRI_API_TOKEN` at runtime.
    #[serde(skip)]
    pub session_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the platform API, e.g. `https://lucky-adda.com/api/v1`.
    pub api_url: String,
    /// Overall request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // Session token comes from the environment only, never the file
        config.session_token = std::env::var(TOKEN_ENV_VAR).ok();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.network.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = Url::parse(&self.network.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                api_url: "https://lucky-adda.com/api/v1".into(),
                timeout_ms: default_timeout_ms(),
                connect_timeout_ms: default_connect_timeout_ms(),
            },
            logging: LoggingConfig {
                level: "info".into(),
                format: "pretty".into(),
            },
            session_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production_api() {
        let config = Config::default();
        assert_eq!(config.network.api_url, "https://lucky-adda.com/api/v1");
        assert_eq!(config.network.timeout_ms, 10_000);
        assert!(config.session_token.is_none());
    }

    #[test]
    fn parse_minimal_toml() {
        let config: Config = toml::from_str(
            r#"
            [network]
            api_url = "https://example.test/api"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.network.api_url, "https://example.test/api");
        assert_eq!(config.network.connect_timeout_ms, 3_000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn validate_rejects_empty_api_url() {
        let mut config = Config::default();
        config.network.api_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_malformed_api_url() {
        let mut config = Config::default();
        config.network.api_url = "not a url".into();
        assert!(config.validate().is_err());
    }
}
