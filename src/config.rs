//! Runtime configuration for the SprintHub server.
//!
//! Values come from three layers, later layers winning: built-in defaults,
//! an optional TOML file named by `SPRINTHUB_CONFIG`, and individual
//! `SPRINTHUB_*` environment variables.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const ENV_CONFIG_FILE: &str = "SPRINTHUB_CONFIG";
const ENV_BIND_ADDRESS: &str = "SPRINTHUB_BIND_ADDRESS";
const ENV_DATABASE_URL: &str = "SPRINTHUB_DATABASE_URL";
const ENV_DATABASE_MAX_CONNECTIONS: &str = "SPRINTHUB_DATABASE_MAX_CONNECTIONS";
const ENV_GENERATOR_BASE_URL: &str = "SPRINTHUB_GENERATOR_BASE_URL";
const ENV_GENERATOR_TIMEOUT_SECS: &str = "SPRINTHUB_GENERATOR_TIMEOUT_SECS";
const ENV_LOG_FILTER: &str = "SPRINTHUB_LOG_FILTER";
const ENV_LOG_JSON: &str = "SPRINTHUB_LOG_JSON";

const DEFAULT_GENERATOR_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_GENERATOR_TIMEOUT_SECS: u64 = 600;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path named by `SPRINTHUB_CONFIG`.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting holds an unusable value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Relational store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `PostgreSQL` URL. `None` selects in-memory storage.
    pub url: Option<String>,
    /// Connection pool size.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

/// External Gherkin generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base URL; requests go to `{base_url}/generate-gherkin/`.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GENERATOR_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_GENERATOR_TIMEOUT_SECS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
            json: false,
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SprintHubConfig {
    /// Socket the HTTP API listens on.
    pub bind_address: SocketAddr,
    /// Relational store settings.
    pub database: DatabaseConfig,
    /// Generator settings.
    pub generator: GeneratorConfig,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for SprintHubConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database: DatabaseConfig::default(),
            generator: GeneratorConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl SprintHubConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or a
    /// value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or a
    /// value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = value(ENV_CONFIG_FILE)
            .map_or_else(|| Ok(Self::default()), |path| Self::from_file(PathBuf::from(path)))?;

        if let Some(raw) = value(ENV_BIND_ADDRESS) {
            config.bind_address = raw.parse().map_err(|err| ConfigError::InvalidValue {
                key: ENV_BIND_ADDRESS,
                message: format!("{err}"),
            })?;
        }
        if let Some(url) = value(ENV_DATABASE_URL) {
            config.database.url = Some(url);
        }
        if let Some(raw) = value(ENV_DATABASE_MAX_CONNECTIONS) {
            config.database.max_connections = parse_number(ENV_DATABASE_MAX_CONNECTIONS, &raw)?;
        }
        if let Some(url) = value(ENV_GENERATOR_BASE_URL) {
            config.generator.base_url = url;
        }
        if let Some(raw) = value(ENV_GENERATOR_TIMEOUT_SECS) {
            config.generator.timeout_secs = parse_number(ENV_GENERATOR_TIMEOUT_SECS, &raw)?;
        }
        if let Some(filter) = value(ENV_LOG_FILTER) {
            config.log.filter = filter;
        }
        if let Some(raw) = value(ENV_LOG_JSON) {
            config.log.json = parse_flag(ENV_LOG_JSON, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document, filling omitted settings with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidValue`] for unusable values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Read { path, source })?;
        Self::from_toml_str(&raw)
    }

    /// Returns the generator timeout as a [`std::time::Duration`].
    #[must_use]
    pub const fn generator_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.generator.timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "database.max_connections",
                message: "must be greater than zero".to_owned(),
            });
        }
        if self.generator.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "generator.timeout_secs",
                message: "must be greater than zero".to_owned(),
            });
        }
        let base = self.generator.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "generator.base_url",
                message: format!("expected an http(s) URL, got `{base}`"),
            });
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        message: format!("expected a non-negative integer, got `{raw}`"),
    })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got `{raw}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SprintHubConfig};
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn defaults_apply_without_environment() {
        let config = SprintHubConfig::from_lookup(lookup_from(&[])).expect("defaults load");

        assert_eq!(config, SprintHubConfig::default());
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:5000");
        assert_eq!(config.generator.base_url, "http://localhost:8000");
        assert_eq!(config.generator.timeout_secs, 600);
        assert!(config.database.url.is_none());
    }

    #[rstest]
    fn environment_overrides_defaults() {
        let config = SprintHubConfig::from_lookup(lookup_from(&[
            ("SPRINTHUB_BIND_ADDRESS", "0.0.0.0:8080"),
            ("SPRINTHUB_DATABASE_URL", "postgres://localhost/sprinthub"),
            ("SPRINTHUB_DATABASE_MAX_CONNECTIONS", "4"),
            ("SPRINTHUB_GENERATOR_BASE_URL", "http://llama:9000"),
            ("SPRINTHUB_GENERATOR_TIMEOUT_SECS", "30"),
            ("SPRINTHUB_LOG_FILTER", "sprinthub=debug"),
            ("SPRINTHUB_LOG_JSON", "true"),
        ]))
        .expect("overrides load");

        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/sprinthub")
        );
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.generator.base_url, "http://llama:9000");
        assert_eq!(config.generator_timeout().as_secs(), 30);
        assert_eq!(config.log.filter, "sprinthub=debug");
        assert!(config.log.json);
    }

    #[rstest]
    fn blank_variables_are_ignored() {
        let config =
            SprintHubConfig::from_lookup(lookup_from(&[("SPRINTHUB_DATABASE_URL", "   ")]))
                .expect("blank values load");
        assert!(config.database.url.is_none());
    }

    #[rstest]
    #[case("SPRINTHUB_GENERATOR_TIMEOUT_SECS", "soon")]
    #[case("SPRINTHUB_GENERATOR_TIMEOUT_SECS", "0")]
    #[case("SPRINTHUB_DATABASE_MAX_CONNECTIONS", "-1")]
    #[case("SPRINTHUB_BIND_ADDRESS", "localhost")]
    #[case("SPRINTHUB_LOG_JSON", "maybe")]
    #[case("SPRINTHUB_GENERATOR_BASE_URL", "ftp://llama")]
    fn invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let result = SprintHubConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[rstest]
    fn toml_fills_missing_sections_with_defaults() {
        let config = SprintHubConfig::from_toml_str(
            r#"
            bind_address = "127.0.0.1:6000"

            [generator]
            base_url = "https://gen.example.com"
            "#,
        )
        .expect("toml loads");

        assert_eq!(config.bind_address.port(), 6000);
        assert_eq!(config.generator.base_url, "https://gen.example.com");
        assert_eq!(config.generator.timeout_secs, 600);
        assert_eq!(config.database.max_connections, 8);
    }

    #[rstest]
    fn toml_rejects_unknown_keys() {
        let result = SprintHubConfig::from_toml_str("bind = \"127.0.0.1:1\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    fn missing_config_file_is_reported() {
        let result = SprintHubConfig::from_lookup(lookup_from(&[(
            "SPRINTHUB_CONFIG",
            "/nonexistent/sprinthub.toml",
        )]));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
