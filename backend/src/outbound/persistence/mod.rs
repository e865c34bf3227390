//! PostgreSQL persistence adapters using Diesel with `diesel-async` and a
//! `bb8` connection pool.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! internal; only the repository, pool and migration entry points are
//! exported.
//!
//! ```ignore
//! use reverence::outbound::persistence::{DbPool, DieselCatalogueRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/catalogue")).await?;
//! let repo = DieselCatalogueRepository::new(pool);
//! ```

mod diesel_catalogue_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_repository::DieselCatalogueRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
