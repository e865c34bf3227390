//! Catalogue server entry point.

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use reverence::inbound::http::health::HealthState;
use reverence::inbound::http::routes::empty_storefront;
use reverence::inbound::http::session_config::{BuildMode, session_settings_from_env};
use reverence::server::{ServerSettings, create_server, prepare_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(format!("settings: {e}"))
    })?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions()).map_err(|e| {
        error!(error = %e, "invalid session configuration");
        std::io::Error::other(format!("session configuration: {e}"))
    })?;
    let config = prepare_config(&settings, session).await.map_err(|e| {
        error!(error = %e, "startup failed");
        std::io::Error::other(e.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config, empty_storefront)?.await
}
