//! Business rules sitting between the HTTP routes and the repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("first name is required")]
    FirstNameRequired,

    #[error("last name is required")]
    LastNameRequired,

    #[error("user '{0}' doesn't exist")]
    NotFound(String),

    #[error(transparent)]
    Persistence(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id.into_inner()),
            other => ServiceError::Persistence(other),
        }
    }
}
