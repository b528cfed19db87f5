use envbadge_core::{EnvironmentEntry, MatchStrategy};

/// Port for identifier matching strategies
///
/// Implementations scan `entries` in order and return the first entry the
/// signal matches. Matching never fails: anything unrecognised, including
/// malformed input, is simply "no match".
pub trait IdentifierMatcher: Send {
    /// Find the first entry matched by `signal`
    fn find<'a>(
        &self,
        signal: &str,
        entries: &'a [EnvironmentEntry],
    ) -> Option<&'a EnvironmentEntry>;

    /// The strategy this matcher implements
    fn strategy(&self) -> MatchStrategy;

    /// Get the name of the matcher
    fn name(&self) -> &str;
}
