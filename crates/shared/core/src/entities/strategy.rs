use serde::{Deserialize, Serialize};

/// Default JSON field holding the organization id in auth-token blobs
pub const DEFAULT_ORG_ID_FIELD: &str = "orgId";

/// How a detector compares a signal against table identifiers
///
/// Exactly one strategy is active per detector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Signal contains the identifier. Only safe for fixed-length opaque
    /// identifiers (UUIDs) where one key cannot contain another.
    #[default]
    Substring,
    /// Trimmed, case-insensitive equality (org names)
    Exact,
    /// Signal is a page URL (or bare host); its host is compared
    /// case-insensitively with the identifier
    Host,
    /// Decode the signal as JSON and compare a string value (or the string
    /// held in `field` of an object); malformed JSON falls back to substring
    JsonField {
        #[serde(default)]
        field: Option<String>,
    },
}

impl MatchStrategy {
    /// Whether identifiers may be found by substring search under this strategy
    pub fn uses_substring_search(&self) -> bool {
        matches!(self, MatchStrategy::Substring | MatchStrategy::JsonField { .. })
    }

    /// Whether identifiers are compared ignoring ASCII case
    pub fn ignores_case(&self) -> bool {
        matches!(self, MatchStrategy::Exact | MatchStrategy::Host)
    }
}
