//! Top-level URL dispatch.
//!
//! ```text
//! /admin/...  administration endpoints (session protected)
//! /...        storefront routes supplied by the embedding application
//! ```
//!
//! The storefront scope has an empty prefix and therefore matches every
//! path that reaches it; register probes and documentation first.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::web;

use super::admin;

/// Prefix for the administration surface.
pub const ADMIN_PREFIX: &str = "/admin";
/// Prefix for the storefront sub-application.
pub const STOREFRONT_PREFIX: &str = "";

/// Mount the admin scope and the storefront scope on `cfg`.
///
/// # Examples
///
/// ```
/// use actix_session::{SessionMiddleware, storage::CookieSessionStore};
/// use actix_web::{App, HttpResponse, cookie::Key, web};
/// use reverence::inbound::http::routes;
///
/// let session = SessionMiddleware::new(CookieSessionStore::default(), Key::generate());
/// let _app = App::new().configure(|cfg| {
///     routes::configure(cfg, session, |shop| {
///         shop.route("/", web::get().to(HttpResponse::Ok));
///     });
/// });
/// ```
pub fn configure<S>(
    cfg: &mut web::ServiceConfig,
    session: SessionMiddleware<CookieSessionStore>,
    storefront: S,
) where
    S: FnOnce(&mut web::ServiceConfig),
{
    cfg.service(
        web::scope(ADMIN_PREFIX)
            .wrap(session)
            .configure(admin::configure),
    )
    .service(web::scope(STOREFRONT_PREFIX).configure(storefront));
}

/// Storefront with no routes of its own; every path answers `404`.
pub fn empty_storefront(_cfg: &mut web::ServiceConfig) {}
