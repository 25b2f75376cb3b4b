//! Runs the SprintHub HTTP server.
//!
//! Usage:
//!
//! ```text
//! SPRINTHUB_DATABASE_URL=postgres://localhost/sprinthub sprinthub
//! ```
//!
//! All settings come from `SPRINTHUB_*` environment variables or the TOML
//! file named by `SPRINTHUB_CONFIG`. Without a database URL the server keeps
//! its data in memory.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use diesel::r2d2::PoolError;
use sprinthub::api::{self, AppState, Repositories};
use sprinthub::config::{ConfigError, SprintHubConfig};
use sprinthub::persistence::build_pool;
use sprinthub::telemetry::{self, TelemetryError};
use sprinthub::test_case::adapters::http::HttpGherkinGenerator;
use thiserror::Error;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to open database pool: {0}")]
    Pool(#[source] PoolError),
    #[error("failed to build generator client: {0}")]
    Generator(#[source] reqwest::Error),
    #[error("server I/O failed: {0}")]
    Io(#[source] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), BoxError> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), ServerError> {
    let config = SprintHubConfig::from_env()?;
    telemetry::init(&config.log)?;

    let repositories = open_repositories(&config)?;
    let generator =
        HttpGherkinGenerator::new(&config.generator.base_url, config.generator_timeout())
            .map_err(ServerError::Generator)?;
    info!(
        bind_address = %config.bind_address,
        generator = generator.endpoint(),
        timeout_secs = config.generator.timeout_secs,
        "starting SprintHub"
    );

    let state = web::Data::new(AppState::new(repositories, Arc::new(generator)));
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(config.bind_address)
    .map_err(ServerError::Io)?
    .run()
    .await
    .map_err(ServerError::Io)
}

fn open_repositories(config: &SprintHubConfig) -> Result<Repositories, ServerError> {
    match config.database.url.as_deref() {
        Some(url) => {
            let pool =
                build_pool(url, config.database.max_connections).map_err(ServerError::Pool)?;
            info!(
                max_connections = config.database.max_connections,
                "using PostgreSQL storage"
            );
            Ok(Repositories::postgres(&pool))
        }
        None => {
            warn!("no database URL configured, data will not survive a restart");
            Ok(Repositories::in_memory())
        }
    }
}
