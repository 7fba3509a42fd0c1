//! Product service entry-point: loads settings, wires adapters and serves
//! the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use product_service::inbound::http::health::HealthState;
use product_service::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use product_service::settings::ServiceSettings;
use server::{ServerConfig, build_review_source, create_server};

fn io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(io_error)?;
    let bind_addr = settings.bind_addr().map_err(io_error)?;

    let mut config = ServerConfig::new(bind_addr, build_review_source(&settings)?);
    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url).await.map_err(io_error)?;
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.database_pool_size())
            .with_connection_timeout(settings.database_timeout());
        let pool = DbPool::new(pool_config).await.map_err(io_error)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "product service listening");
    server.await
}
