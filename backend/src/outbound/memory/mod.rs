//! In-process adapters used when no external store is configured.

mod in_memory_catalogue_repository;

pub use in_memory_catalogue_repository::InMemoryCatalogueRepository;
