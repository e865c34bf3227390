//! Classification of Diesel and pool failures into catalogue port errors.
//!
//! Integrity violations keep the offending constraint name so the domain
//! can tell a duplicate slug from a duplicate size name.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::CatalogueRepositoryError;

use super::pool::PoolError;

const UNKNOWN_CONSTRAINT: &str = "unknown";

/// Map pool checkout and build failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> CatalogueRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    CatalogueRepositoryError::connection(message)
}

/// Map a Diesel error to the matching catalogue repository error.
pub(crate) fn map_diesel_error(error: DieselError) -> CatalogueRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => CatalogueRepositoryError::not_found(),
        DieselError::DatabaseError(kind, info) => {
            let constraint = info
                .constraint_name()
                .unwrap_or(UNKNOWN_CONSTRAINT)
                .to_owned();
            match kind {
                DatabaseErrorKind::UniqueViolation => {
                    CatalogueRepositoryError::unique_violation(constraint)
                }
                DatabaseErrorKind::ForeignKeyViolation => {
                    CatalogueRepositoryError::missing_reference(constraint)
                }
                DatabaseErrorKind::CheckViolation => {
                    warn!(constraint = %constraint, "check constraint rejected a validated entity");
                    CatalogueRepositoryError::query(format!("check constraint {constraint} failed"))
                }
                DatabaseErrorKind::ClosedConnection => {
                    CatalogueRepositoryError::connection("database connection closed")
                }
                _ => CatalogueRepositoryError::query("database error"),
            }
        }
        DieselError::QueryBuilderError(_) => CatalogueRepositoryError::query("database query error"),
        _ => CatalogueRepositoryError::query("database error"),
    }
}
