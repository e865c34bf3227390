//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they stay testable without a database.

use std::sync::Arc;

use crate::domain::CatalogueService;
use crate::domain::ports::{CatalogueCommand, CatalogueQuery, CatalogueRepository, LoginService};

/// Port bundle used by the admin handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub catalogue: Arc<dyn CatalogueCommand>,
    pub catalogue_query: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    pub fn new(
        login: Arc<dyn LoginService>,
        catalogue: Arc<dyn CatalogueCommand>,
        catalogue_query: Arc<dyn CatalogueQuery>,
    ) -> Self {
        Self {
            login,
            catalogue,
            catalogue_query,
        }
    }

    /// Wire both catalogue ports to one [`CatalogueService`].
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use reverence::domain::ports::StaticLoginService;
    /// use reverence::inbound::http::state::HttpState;
    /// use reverence::outbound::memory::InMemoryCatalogueRepository;
    ///
    /// let state = HttpState::from_service(
    ///     Arc::new(StaticLoginService::new("admin", "password")),
    ///     Arc::new(InMemoryCatalogueRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _query = state.catalogue_query.clone();
    /// ```
    pub fn from_service<R>(
        login: Arc<dyn LoginService>,
        repo: Arc<R>,
        clock: Arc<dyn mockable::Clock>,
    ) -> Self
    where
        R: CatalogueRepository + 'static,
    {
        let service = Arc::new(CatalogueService::new(repo, clock));
        Self::new(login, service.clone(), service)
    }
}
