//! Envbadge Clock Infrastructure
//!
//! Time sources handed to the poller. The detector itself never reads a
//! clock: it is given `now` on every observation.
//!
//! - [`SystemClock`]: wall-anchored monotonic time for production
//! - [`ManualClock`]: frozen time that only moves when advanced, for tests
//!
//! ## Usage
//!
//! ```ignore
//! use envbadge_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let t0 = clock.now();
//! clock.advance(Duration::milliseconds(3000));
//! assert_eq!(clock.now() - t0, Duration::milliseconds(3000));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use envbadge_ports::Clock;
