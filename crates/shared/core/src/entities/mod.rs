mod badge;
mod environment;
mod strategy;

pub use badge::{Badge, BadgeDecision};
pub use environment::EnvironmentEntry;
pub use strategy::{DEFAULT_ORG_ID_FIELD, MatchStrategy};
