//! Envbadge Matching Strategies
//!
//! Implementations of the identifier matching strategies a detector can be
//! configured with. Each scans the table in insertion order; first match wins.

mod exact;
mod host;
mod json_field;
mod substring;

pub use exact::ExactMatcher;
pub use host::HostMatcher;
pub use json_field::JsonFieldMatcher;
pub use substring::SubstringMatcher;

// Re-export the trait from ports for convenience
pub use envbadge_ports::IdentifierMatcher;

use envbadge_core::MatchStrategy;

/// Factory function to create a matcher for a configured strategy
pub fn create_matcher(strategy: &MatchStrategy) -> Box<dyn IdentifierMatcher> {
    match strategy {
        MatchStrategy::Substring => Box::new(SubstringMatcher::new()),
        MatchStrategy::Exact => Box::new(ExactMatcher::new()),
        MatchStrategy::Host => Box::new(HostMatcher::new()),
        MatchStrategy::JsonField { field } => Box::new(JsonFieldMatcher::new(field.clone())),
    }
}
