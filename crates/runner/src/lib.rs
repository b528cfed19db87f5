//! Envbadge Runner - polling host for the badge policy
//!
//! Plays the part of the embedding application around the detectors:
//!
//! - **Config**: JSON profiles (one lookup table + strategy per lane)
//! - **Sources**: where each lane's signal comes from
//! - **Sinks**: where badge decisions are rendered
//! - **Poller**: the fixed-cadence loop tying them together
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//!   │ org-name src │  │ org-id src   │  │ hostname src │
//!   └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!          │ signal          │ signal          │ signal
//!          ▼                 ▼                 ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                   DetectorChain                     │
//! │  lane 0 (priority) ─▶ lane 1 ─▶ lane 2 (fallback)   │
//! └──────────────────────────┬──────────────────────────┘
//!                            │ BadgeDecision
//!                            ▼
//!                   ┌─────────────────┐
//!                   │    BadgeSink    │
//!                   └─────────────────┘
//! ```

pub mod config;
pub mod poller;
pub mod sink;
pub mod source;

// Re-export main types
pub use config::{LoadError, ProfileConfig, WatchConfigFile};
pub use poller::{BadgePoller, PollStats, PollerError};
pub use sink::{LogBadgeSink, MemoryBadgeSink, Overlay};
pub use source::{FileSignalSource, StaticSignalSource, WatchSignalSource};
