#[cfg(feature = "db")]
use diesel::r2d2::PoolError;
#[cfg(feature = "db")]
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures reported by the record store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record has the requested id. Updates and deletes of a missing
    /// record report this too.
    #[error("record not found")]
    NotFound,

    /// A stored row no longer satisfies the domain constraints.
    #[error("stored record is invalid: {0}")]
    InvalidRecord(String),

    /// The store refused a write, e.g. a profile for an unknown user.
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("database unavailable: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Turns the affected row count of an update or delete into a result.
pub fn ensure_found(affected: usize) -> RepositoryResult<()> {
    match affected {
        0 => Err(RepositoryError::NotFound),
        _ => Ok(()),
    }
}

#[cfg(feature = "db")]
impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => RepositoryError::Constraint(info.message().to_string()),
            DieselError::DatabaseError(_, info) => {
                RepositoryError::Database(info.message().to_string())
            }
            DieselError::DeserializationError(err) => {
                RepositoryError::InvalidRecord(err.to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

#[cfg(feature = "db")]
impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}
