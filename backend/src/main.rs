//! Holocron entry-point: loads settings, prepares storage and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use holocron::inbound::http::health::HealthState;
use holocron::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|err| eyre!("tracing init failed: {err}"))?;

    let settings = ServerSettings::load().map_err(|err| eyre!("invalid settings: {err}"))?;
    let mut config = ServerConfig::new(settings.host.as_str(), settings.port);

    match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .wrap_err("running database migrations")?;
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections),
            )
            .await
            .wrap_err("building database pool")?;
            info!("using PostgreSQL storage");
            config = config.with_db_pool(pool);
        }
        None => info!("no database configured; using in-memory storage"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(host = %settings.host, port = settings.port, "starting server");
    create_server(health_state, config)
        .wrap_err("binding HTTP listener")?
        .await
        .wrap_err("serving HTTP")
}
