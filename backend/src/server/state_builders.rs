//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCatalogueRepository;
use crate::outbound::persistence::DieselCatalogueRepository;

use super::ServerConfig;

/// Build the shared HTTP state, backed by PostgreSQL when a pool is
/// configured and by an in-memory catalogue otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_service(
            config.login.clone(),
            Arc::new(DieselCatalogueRepository::new(pool.clone())),
            clock,
        ),
        None => {
            warn!("no database configured; catalogue changes will not survive a restart");
            HttpState::from_service(
                config.login.clone(),
                Arc::new(InMemoryCatalogueRepository::new()),
                clock,
            )
        }
    };
    web::Data::new(state)
}
