//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::{ServerSettings, SettingsError};

use state_builders::build_http_state;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite, time::Duration};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::StaticLoginService;
use crate::inbound::http::error::{json_config, path_config, query_config};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::routes;
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};

/// Name of the admin session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Storefront route table mounted at `/`.
pub type StorefrontConfig = fn(&mut web::ServiceConfig);

/// Failures while preparing the server before it binds.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Everything one worker's [`App`] needs.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
    pub ttl_minutes: i64,
    pub storefront: StorefrontConfig,
}

fn session_middleware(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
    ttl_minutes: i64,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.into())
        .cookie_path(routes::ADMIN_PREFIX.into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::minutes(ttl_minutes)),
        )
        .build()
}

/// Assemble the application: probes, extractor error handlers, the admin
/// scope and the storefront.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
        ttl_minutes,
        storefront,
    } = deps;

    let session = session_middleware(key, cookie_secure, same_site, ttl_minutes);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(|cfg| routes::configure(cfg, session, storefront))
}

/// Resolve a [`ServerConfig`] from settings, migrating and pooling the
/// database when one is configured.
///
/// # Errors
///
/// Returns [`StartupError`] when credentials are missing, migrations fail
/// or the pool cannot be built.
pub async fn prepare_config(
    settings: &ServerSettings,
    session: SessionSettings,
) -> Result<ServerConfig, StartupError> {
    let (username, password) = settings.admin_credentials()?;
    let login = Arc::new(StaticLoginService::new(username, password.as_str()));
    let config = ServerConfig::new(session, settings.bind_addr(), login);

    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };
    run_pending_migrations(database_url.to_owned()).await?;
    let mut pool_config = PoolConfig::new(database_url);
    if let Some(max_size) = settings.pool_max_size {
        pool_config = pool_config.with_max_size(max_size);
    }
    let pool = DbPool::new(pool_config).await?;
    Ok(config.with_db_pool(pool))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    storefront: StorefrontConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        ttl_minutes,
        bind_addr,
        login: _,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
            ttl_minutes,
            storefront,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "catalogue server listening");
    health_state.mark_ready();
    Ok(server)
}
