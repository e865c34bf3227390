//! Admin session helpers that keep handlers free of Actix session details.
//!
//! The cookie carries only the authenticated operator's username; handlers
//! call [`SessionContext::require_admin`] to gate every admin route.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AdminAccount, Error};

pub(crate) const ADMIN_KEY: &str = "admin";

/// Extractor wrapping the Actix session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the admin in the session cookie, rotating the session id.
    pub fn persist_admin(&self, admin: &AdminAccount) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ADMIN_KEY, admin.username())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Currently signed-in admin, if any.
    pub fn admin(&self) -> Result<Option<AdminAccount>, Error> {
        let username = self
            .0
            .get::<String>(ADMIN_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(username.and_then(|name| {
            if name.trim().is_empty() {
                warn!("discarding admin session with a blank username");
                None
            } else {
                Some(AdminAccount::new(name))
            }
        }))
    }

    /// Signed-in admin or `401 Unauthorized`.
    pub fn require_admin(&self) -> Result<AdminAccount, Error> {
        self.admin()?
            .ok_or_else(|| Error::unauthorized("admin login required"))
    }

    /// Drop the session and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
