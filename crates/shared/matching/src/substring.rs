use envbadge_core::{EnvironmentEntry, MatchStrategy};
use envbadge_ports::IdentifierMatcher;

/// Containment matcher for opaque identifiers embedded in larger blobs
///
/// An auth token that embeds an org UUID anywhere in its text matches that
/// UUID's entry.
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstringMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// First entry whose identifier occurs in `signal`
pub(crate) fn find_contained<'a>(
    signal: &str,
    entries: &'a [EnvironmentEntry],
) -> Option<&'a EnvironmentEntry> {
    entries
        .iter()
        .find(|entry| signal.contains(entry.identifier.as_str()))
}

impl IdentifierMatcher for SubstringMatcher {
    fn find<'a>(
        &self,
        signal: &str,
        entries: &'a [EnvironmentEntry],
    ) -> Option<&'a EnvironmentEntry> {
        find_contained(signal, entries)
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Substring
    }

    fn name(&self) -> &str {
        "Substring"
    }
}
