use chrono::{DateTime, Duration, Utc};
use floe_core::Timestamp;
use floe_ports::Clock;
use parking_lot::Mutex;

/// Deterministic clock that only moves when told to
///
/// With a non-zero `step`, every call to [`Clock::now`] returns the current
/// time and then advances it by `step`, giving each order a distinct arrival
/// time without depending on the wall clock.
pub struct ManualClock {
    current: Mutex<Timestamp>,
    step: Duration,
}

impl ManualClock {
    /// Create a frozen clock starting at `initial_time`
    pub fn new(initial_time: Timestamp) -> Self {
        Self::with_step(initial_time, Duration::zero())
    }

    /// Create a clock starting at `initial_time` that advances `step` per read
    pub fn with_step(initial_time: Timestamp, step: Duration) -> Self {
        Self {
            current: Mutex::new(initial_time),
            step,
        }
    }

    /// Create a stepping clock starting at the Unix epoch
    pub fn stepping(step: Duration) -> Self {
        Self::with_step(DateTime::<Utc>::UNIX_EPOCH, step)
    }

    /// Advance the clock by a specified duration
    pub fn advance(&self, duration: Duration) {
        *self.current.lock() += duration;
    }

    /// Explicitly set the current time
    pub fn set_time(&self, time: Timestamp) {
        *self.current.lock() = time;
    }

    /// Current time without stepping
    pub fn peek(&self) -> Timestamp {
        *self.current.lock()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock();
        let now = *current;
        *current += self.step;
        now
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
