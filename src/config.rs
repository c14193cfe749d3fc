//! Configuration Module
//!
//! This module defines the configuration for a conformance run.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::runner::ResponseSource;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [logging]
/// level = "debug"
///
/// [[responses]]
/// endpoint = "metadata"
/// path = "fixtures/metadata.json"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub responses: Vec<ResponseSource>,
}

/// Logging configuration
///
/// `level` is one of `trace`, `debug`, `info`, `warn` or `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> anyhow::Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown log level: {}", self.level))
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.logging.max_level()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Endpoint;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [logging]
            level = "debug"

            [[responses]]
            endpoint = "submit"
            path = "fixtures/submit.json"

            [[responses]]
            endpoint = "signatures"
            path = "fixtures/combine.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(config.responses.len(), 2);
        assert_eq!(config.responses[1].endpoint, Endpoint::Signatures);
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::INFO);
        assert!(config.responses.is_empty());
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Config::parse("[logging]\nlevel = \"loud\"").is_err());
        assert!(Config::parse("[[responses]]\nendpoint = \"block\"\npath = \"x\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asserter.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"").unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(Config::load("does/not/exist.toml").is_err());
    }
}
