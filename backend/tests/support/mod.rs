//! Shared helpers for the database-backed integration tests.

pub mod cluster_skip;

use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use reverence::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use tokio::runtime::Runtime;
use uuid::Uuid;

pub use cluster_skip::handle_cluster_setup_failure;

/// A migrated scratch database and a pool connected to it.
pub struct CatalogueDatabase {
    pub runtime: Runtime,
    pub pool: DbPool,
    pub database: TemporaryDatabase,
}

fn new_test_database_name() -> String {
    format!("catalogue_test_{}", Uuid::new_v4().simple())
}

fn provision() -> Result<CatalogueDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let database = cluster
        .temporary_database(new_test_database_name().as_str())
        .map_err(|err| format!("create database: {err:?}"))?;
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let url = database.url().to_owned();
    let pool = runtime.block_on(async {
        run_pending_migrations(url.clone())
            .await
            .map_err(|err| format!("migrations: {err}"))?;
        DbPool::new(PoolConfig::new(url).with_max_size(2))
            .await
            .map_err(|err| format!("pool: {err}"))
    })?;
    Ok(CatalogueDatabase {
        runtime,
        pool,
        database,
    })
}

/// Provision a fresh database on the shared embedded cluster and apply the
/// catalogue migrations.
///
/// Returns `None` when provisioning fails and `SKIP_TEST_CLUSTER` is set.
pub fn catalogue_database() -> Option<CatalogueDatabase> {
    match provision() {
        Ok(database) => Some(database),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}
