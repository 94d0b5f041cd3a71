//! Floe Clock Adapters
//!
//! Implementations of the [`Clock`] port used to stamp order arrival times:
//!
//! - [`SystemClock`]: wall-clock time for live use
//! - [`ManualClock`]: frozen time that only moves when told to, optionally
//!   stepping forward on every read so consecutive orders never tie
//!
//! ```ignore
//! use floe_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::stepping(Duration::milliseconds(1));
//! let first = clock.now();
//! let second = clock.now();
//! assert!(second > first);
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use floe_ports::Clock;
