use envbadge_core::{EnvironmentEntry, MatchStrategy};
use envbadge_ports::IdentifierMatcher;

/// Whole-value matcher for identifiers that can be prefixes of one another
///
/// Org names such as `wawanesa` and `wawanesa-dr` must go through this
/// matcher. The signal is trimmed and compared ASCII case-insensitively.
pub struct ExactMatcher;

impl ExactMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierMatcher for ExactMatcher {
    fn find<'a>(
        &self,
        signal: &str,
        entries: &'a [EnvironmentEntry],
    ) -> Option<&'a EnvironmentEntry> {
        let needle = signal.trim();
        if needle.is_empty() {
            return None;
        }
        entries
            .iter()
            .find(|entry| entry.identifier.trim().eq_ignore_ascii_case(needle))
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Exact
    }

    fn name(&self) -> &str {
        "Exact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_names() -> Vec<EnvironmentEntry> {
        vec![
            EnvironmentEntry::silent("wawanesa", "PROD"),
            EnvironmentEntry::badged("wawanesa-dr", "DR", "red"),
            EnvironmentEntry::badged("wawanesa-test", "TEST", "orange"),
        ]
    }

    #[test]
    fn test_prefix_names_do_not_collide() {
        let entries = org_names();
        let matcher = ExactMatcher::new();
        assert_eq!(matcher.find("wawanesa-dr", &entries).unwrap().label, "DR");
        assert_eq!(matcher.find("wawanesa", &entries).unwrap().label, "PROD");
    }

    #[test]
    fn test_trims_and_ignores_case() {
        let entries = org_names();
        let found = ExactMatcher::new().find("  Wawanesa-TEST\n", &entries).unwrap();
        assert_eq!(found.label, "TEST");
    }

    #[test]
    fn test_blank_signal() {
        let entries = org_names();
        assert!(ExactMatcher::new().find("   ", &entries).is_none());
        assert!(ExactMatcher::new().find("wawanesa-uat", &entries).is_none());
    }
}
