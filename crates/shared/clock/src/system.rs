use chrono::{DateTime, TimeDelta, Utc};
use envbadge_core::Timestamp;
use envbadge_ports::Clock;
use std::time::Instant;

/// Wall-anchored monotonic clock for the watcher
///
/// Reads the wall clock once at construction and advances with
/// [`Instant`] afterwards, so suppression deadlines survive NTP steps and
/// manual clock changes on the host.
pub struct SystemClock {
    anchor: Timestamp,
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            anchor: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Wall time this clock was anchored to
    pub fn anchor(&self) -> Timestamp {
        self.anchor
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);
        self.anchor
            .checked_add_signed(elapsed)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
