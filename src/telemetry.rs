//! Tracing subscriber installation.

use crate::config::LogConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directives do not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Builds the event filter: `RUST_LOG` when set, else the configured
/// directives.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the configured directives are
/// invalid.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(TelemetryError::from)
}

/// Installs the process-wide `tracing` subscriber.
///
/// `log` records, including actix-web's request log, are bridged into
/// `tracing` by the subscriber's `tracing-log` integration.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::Install(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{TelemetryError, build_filter};
    use crate::config::LogConfig;
    use rstest::rstest;

    #[rstest]
    fn rejects_malformed_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LogConfig {
            filter: "sprinthub=loud".to_owned(),
            json: false,
        };
        assert!(matches!(build_filter(&config), Err(TelemetryError::Filter(_))));
    }

    #[rstest]
    fn accepts_module_directives() {
        let config = LogConfig {
            filter: "info,sprinthub::test_case=debug".to_owned(),
            json: true,
        };
        assert!(build_filter(&config).is_ok());
    }
}
