//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_command;
mod catalogue_query;
mod catalogue_repository;
mod login_service;

#[cfg(test)]
pub use catalogue_command::MockCatalogueCommand;
pub use catalogue_command::{CatalogueCommand, CategoryInput, ClothingItemInput, SizeInput};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{
    CatalogueRepository, CatalogueRepositoryError, ClothingItemFilter,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginService, StaticLoginService};
