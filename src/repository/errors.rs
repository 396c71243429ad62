use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result alias used by every store operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// Unique, foreign key, not-null or check constraint rejected the row.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The store could not be reached or no connection was available.
    #[error("connection error: {0}")]
    Connection(String),
    #[error("database error: {0}")]
    Database(String),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                RepositoryError::Connection(info.message().to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(value: PoolError) -> Self {
        RepositoryError::Connection(value.to_string())
    }
}

impl From<diesel::ConnectionError> for RepositoryError {
    fn from(value: diesel::ConnectionError) -> Self {
        RepositoryError::Connection(value.to_string())
    }
}
