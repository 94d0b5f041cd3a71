use floe_core::OrderValidationError;
use floe_ports::{MatchingError, RepositoryError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The order was rejected before any state was touched
    #[error("Invalid order: {0}")]
    Validation(#[from] OrderValidationError),

    /// The pass hit an invariant violation and was abandoned unpersisted
    #[error("Internal error: {0}")]
    Internal(String),

    /// The repository failed; the book may not have been updated
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl From<MatchingError> for ServiceError {
    fn from(err: MatchingError) -> Self {
        match err {
            MatchingError::InvariantViolation(msg) => ServiceError::Internal(msg),
            MatchingError::Repository(err) => ServiceError::Repository(err),
        }
    }
}
