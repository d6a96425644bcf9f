//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `plantcare.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use plantcare_domain::care::{
    CareSchedule, DEFAULT_FERTILIZING_INTERVAL_DAYS, DEFAULT_WATERING_INTERVAL_DAYS,
};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Storage backend settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Care scheduling intervals.
    pub care: CareConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Which store backs the services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Persistent `SQLite` database.
    #[default]
    Sqlite,
    /// Volatile in-process collections, lost on restart.
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Validation(format!(
                "unknown storage backend {other:?}"
            ))),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Selected backend.
    pub backend: StorageBackend,
    /// `SQLite` connection URL, ignored by the memory backend.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Care intervals in whole days.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    pub watering_interval_days: u32,
    pub fertilizing_interval_days: u32,
}

impl Config {
    /// Load configuration from `plantcare.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override is invalid, or if the resulting values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("plantcare.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("PLANTCARE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PLANTCARE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("PLANTCARE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("PLANTCARE_STORAGE") {
            self.storage.backend = val.parse()?;
        }
        if let Some(val) = lookup("PLANTCARE_DATABASE_URL") {
            self.storage.url = val;
        }
        if let Some(val) = lookup("PLANTCARE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.care.watering_interval_days == 0 || self.care.fertilizing_interval_days == 0 {
            return Err(ConfigError::Validation(
                "care intervals must be at least one day".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.storage.url
    }

    /// The schedule built from the configured intervals.
    #[must_use]
    pub fn care_schedule(&self) -> CareSchedule {
        CareSchedule::from_days(
            self.care.watering_interval_days,
            self.care.fertilizing_interval_days,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: "sqlite:plantcare.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "plantcared=info,plantcare=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            watering_interval_days: DEFAULT_WATERING_INTERVAL_DAYS,
            fertilizing_interval_days: DEFAULT_FERTILIZING_INTERVAL_DAYS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.url, "sqlite:plantcare.db?mode=rwc");
        assert_eq!(config.care_schedule(), CareSchedule::default());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [storage]
            backend = 'memory'
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [care]
            watering_interval_days = 3
            fertilizing_interval_days = 14
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.database_url(), "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.care_schedule(), CareSchedule::from_days(3, 14));
    }

    #[test]
    fn should_reject_unknown_backend_in_toml() {
        let result: Result<Config, _> = toml::from_str("[storage]\nbackend = 'postgres'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.care.fertilizing_interval_days = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("PLANTCARE_BIND", "127.0.0.1:9999"),
                ("PLANTCARE_STORAGE", "memory"),
                ("PLANTCARE_DATABASE_URL", "sqlite::memory:"),
                ("PLANTCARE_LOG", "warn"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_rust_log_over_plantcare_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PLANTCARE_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PLANTCARE_PORT", "eighty")]))
            .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_unknown_backend_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PLANTCARE_STORAGE", "redis")]));
        assert!(result.is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
