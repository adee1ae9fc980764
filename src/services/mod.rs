//! Per-operation orchestration between the HTTP handlers and the
//! repositories.
//!
//! Validation failures and missing records are modeled outcomes, not
//! faults; only repository errors bubble up to be logged and downgraded at
//! the route boundary.

use thiserror::Error;

use crate::dto::api::ValidationIssue;
use crate::repository::errors::RepositoryError;

pub mod cliente;
pub mod personal;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("registro no encontrado")]
    NotFound,

    #[error("datos inválidos")]
    Validation(Vec<ValidationIssue>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
