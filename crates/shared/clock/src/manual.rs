use chrono::{Duration, Utc};
use envbadge_core::Timestamp;
use envbadge_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock that only advances when explicitly moved
///
/// Shared through an `Arc` so a test can hold one handle while the poller
/// holds another.
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a new manual clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time. If None, uses current wall time.
    pub fn new(initial_time: Option<Timestamp>) -> Arc<Self> {
        Arc::new(Self {
            current_time: RwLock::new(initial_time.unwrap_or_else(Utc::now)),
        })
    }

    /// Advance the clock by `duration`
    pub fn advance(&self, duration: Duration) {
        *self.current_time.write() += duration;
    }

    /// Advance the clock by a number of milliseconds
    pub fn advance_ms(&self, millis: i64) {
        self.advance(Duration::milliseconds(millis));
    }

    /// Explicitly set the time
    ///
    /// Warning: moving backwards breaks the monotonic assumption of callers.
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
