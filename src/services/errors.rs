use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the façade operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Provider(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Provider(other),
        }
    }
}
