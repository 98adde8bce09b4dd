//! Service entry-point: loads settings, prepares adapters, and serves HTTP.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use sweetshop::inbound::http::health::HealthState;
use sweetshop::outbound::persistence::{DbPool, run_pending_migrations};
use sweetshop::server::{ServerConfig, create_server};
use sweetshop::settings::AppSettings;

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let config = ServerConfig::from_settings(settings)?;
    let Some(pool_config) = settings.pool_config() else {
        return Ok(config);
    };

    if settings.run_migrations {
        let applied = run_pending_migrations(pool_config.database_url())
            .await
            .wrap_err("failed to apply database migrations")?;
        info!(count = applied.len(), migrations = ?applied, "migrations applied");
    }

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let config = server_config(&settings).await?;
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "inventory service listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
