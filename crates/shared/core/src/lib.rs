//! Envbadge Core Domain
//!
//! Pure domain types for environment detection and badge display.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Badge, BadgeDecision, DEFAULT_ORG_ID_FIELD, EnvironmentEntry, MatchStrategy};
pub use values::{Identifier, Signal, Timestamp};
