//! Environment lookup table

use envbadge_core::{EnvironmentEntry, MatchStrategy};
use envbadge_ports::{ConfigError, ConfigResult};
use std::collections::HashSet;

/// Fixed, insertion-ordered mapping from identifier to environment
///
/// Built once at startup and never mutated. The table also carries the
/// matching strategy its identifiers are meant for, because the validity of
/// a table depends on it: substring search is only sound when no identifier
/// is contained in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentTable {
    strategy: MatchStrategy,
    entries: Vec<EnvironmentEntry>,
}

impl EnvironmentTable {
    /// Validate and build a table
    ///
    /// Fails on empty identifiers, on duplicate identifiers (later duplicates
    /// are rejected) and, for substring-searching strategies, on identifiers
    /// that contain one another.
    pub fn new(strategy: MatchStrategy, entries: Vec<EnvironmentEntry>) -> ConfigResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.identifier.trim().is_empty() {
                return Err(ConfigError::EmptyIdentifier);
            }
            if !seen.insert(Self::key(&strategy, &entry.identifier)) {
                return Err(ConfigError::DuplicateIdentifier(entry.identifier.clone()));
            }
        }

        if strategy.uses_substring_search() {
            for a in &entries {
                for b in &entries {
                    if a.identifier != b.identifier && b.identifier.contains(a.identifier.as_str())
                    {
                        return Err(ConfigError::AmbiguousIdentifier {
                            shorter: a.identifier.clone(),
                            longer: b.identifier.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { strategy, entries })
    }

    /// Comparison key for duplicate detection, mirroring how the strategy matches
    fn key(strategy: &MatchStrategy, identifier: &str) -> String {
        if strategy.ignores_case() {
            identifier.trim().to_ascii_lowercase()
        } else {
            identifier.to_string()
        }
    }

    pub fn strategy(&self) -> &MatchStrategy {
        &self.strategy
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[EnvironmentEntry] {
        &self.entries
    }

    pub fn get(&self, identifier: &str) -> Option<&EnvironmentEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
