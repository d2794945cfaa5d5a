use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod live;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
