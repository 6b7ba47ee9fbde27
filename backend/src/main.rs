//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::AppSettings;

use server::{ServerConfig, create_server};

fn to_io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

async fn migrate(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(to_io_error)?
        .map_err(to_io_error)?;
    info!(applied, "database schema up to date");
    Ok(())
}

fn load_settings(args: Vec<OsString>) -> std::io::Result<AppSettings> {
    AppSettings::load_from_iter(args).map_err(to_io_error)
}

async fn build_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr().map_err(to_io_error)?);
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        migrate(database_url).await?;
    }
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(to_io_error)?;
    Ok(config.with_db_pool(pool))
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

    let settings = load_settings(std::env::args_os().collect())?;
    let config = build_config(&settings).await?;
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;

    #[actix_rt::test]
    async fn settings_without_database_url_keep_data_in_memory() {
        let _guard = lock_env([
            ("TWITTOR_BIND_ADDR", Some("127.0.0.1:8181".to_owned())),
            ("TWITTOR_DATABASE_URL", None),
            ("TWITTOR_DB_MAX_CONNECTIONS", None),
            ("TWITTOR_RUN_MIGRATIONS", None),
        ]);

        let settings = load_settings(vec![OsString::from("backend")]).expect("settings load");
        assert!(settings.run_migrations());

        let config = build_config(&settings).await.expect("config builds");
        assert_eq!(
            config.bind_addr(),
            "127.0.0.1:8181".parse::<std::net::SocketAddr>().expect("literal")
        );
        assert!(config.db_pool.is_none());
    }
}
