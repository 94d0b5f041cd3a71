use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an order is rejected before it reaches the book
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("Price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(Decimal),

    #[error("Iceberg order requires a peak")]
    MissingPeak,

    #[error("Iceberg peak must be positive, got {0}")]
    NonPositivePeak(Decimal),
}
