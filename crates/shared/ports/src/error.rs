use floe_core::OrderId;
use thiserror::Error;

/// Failures reported by an order repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    #[error("Order {order_id} rejected: {reason}")]
    Rejected { order_id: OrderId, reason: String },
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Errors that abort a matching pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// The engine reached a state that correct code can never produce
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type MatchingResult<T> = std::result::Result<T, MatchingError>;
