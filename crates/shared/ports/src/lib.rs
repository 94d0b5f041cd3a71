//! Floe Ports
//!
//! Port definitions (traits) for the floe order matcher.
//! These define the boundaries between matching logic and infrastructure.

mod clock;
mod error;
mod repository;

pub use clock::Clock;
pub use error::{MatchingError, MatchingResult, RepositoryError, RepositoryResult};
pub use repository::{OrderRepository, PriceFilter};
