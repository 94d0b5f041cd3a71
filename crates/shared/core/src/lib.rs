//! Floe Core Domain
//!
//! Pure domain types for the floe order matcher.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Execution, Order, OrderId, OrderType, Side, Slice};
pub use error::OrderValidationError;
pub use values::{Price, Quantity, Timestamp};
