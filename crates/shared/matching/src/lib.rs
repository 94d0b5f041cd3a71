//! Floe Matching
//!
//! Price-time matching of one incoming order against the resting orders of
//! the opposite side, with iceberg disclosure:
//!
//! - [`DisclosureQueue`]: expands resting orders into peak-bounded slices,
//!   ordered by price then disclosure sequence
//! - [`SourceSlicer`]: cuts the incoming order into slices on demand
//! - [`MatchPass`]: walks both in lockstep and produces executions
//! - [`TradeRecorder`]: keeps executions in the order they happened
//! - [`MatchingEngine`]: wraps a pass with the repository query and the
//!   final persist

mod disclosure;
mod engine;
mod pass;
mod recorder;
mod source;

pub use disclosure::{DisclosureQueue, SlicePriority};
pub use engine::MatchingEngine;
pub use pass::{MatchOutcome, MatchPass};
pub use recorder::TradeRecorder;
pub use source::SourceSlicer;

// Re-export the ports used by callers of the engine
pub use floe_ports::{MatchingError, MatchingResult, OrderRepository, PriceFilter};
