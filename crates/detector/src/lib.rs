//! Envbadge Detector - environment classification with a debounced badge policy
//!
//! - **Table**: immutable, insertion-ordered identifier → environment lookup
//! - **Detector**: turns per-poll signals into [`BadgeDecision`]s, freezing
//!   the display during suppression windows
//! - **Chain**: merges several detectors (one per signal strategy) by priority
//!
//! ## State machine
//!
//! ```text
//!   Cold ──(construction)──▶ Suppressed ──(first poll after deadline)──▶ Settled(env)
//!                               ▲                                         │
//!                               └──────(signal resolves to env2 ≠ env)────┘
//! ```
//!
//! The detector owns no timers. Deadlines are stored and compared against the
//! `now` passed to every [`EnvironmentDetector::observe`] call, so the caller
//! must keep polling for a withheld decision to be released.

pub mod chain;
pub mod detector;
pub mod state;
pub mod table;

pub use chain::{DetectorChain, Lane};
pub use detector::EnvironmentDetector;
pub use state::{DetectorPhase, DetectorState};
pub use table::EnvironmentTable;

pub use envbadge_core::{Badge, BadgeDecision, EnvironmentEntry, MatchStrategy};
pub use envbadge_ports::{ConfigError, ConfigResult};
