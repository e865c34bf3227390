//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{Error as ActixError, test as actix_test};
use mockable::DefaultClock;
use serde_json::json;

use crate::domain::ports::StaticLoginService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCatalogueRepository;

/// Username accepted by [`test_login_service`].
pub const TEST_ADMIN: &str = "admin";
/// Password accepted by [`test_login_service`].
pub const TEST_PASSWORD: &str = "password";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

pub fn test_login_service() -> Arc<StaticLoginService> {
    Arc::new(StaticLoginService::new(TEST_ADMIN, TEST_PASSWORD))
}

/// State backed by a fresh in-memory catalogue.
pub fn in_memory_state() -> HttpState {
    HttpState::from_service(
        test_login_service(),
        Arc::new(InMemoryCatalogueRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Sign in through `POST /admin/login` and return the session cookie.
pub async fn login_cookie<S>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let request = actix_test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({ "username": TEST_ADMIN, "password": TEST_PASSWORD }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert!(response.status().is_success(), "login failed: {}", response.status());
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie")
}
