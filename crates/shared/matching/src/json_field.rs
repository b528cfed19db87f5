use envbadge_core::{DEFAULT_ORG_ID_FIELD, EnvironmentEntry, MatchStrategy};
use envbadge_ports::IdentifierMatcher;
use serde_json::Value;

use crate::substring::find_contained;

/// Matcher for JSON-encoded storage values
///
/// - a JSON string matches the entry with an equal identifier
/// - a JSON object matches via the string held in `field` (default `orgId`)
/// - valid JSON of any other shape matches nothing
/// - malformed JSON falls through to substring search over the raw text
pub struct JsonFieldMatcher {
    field: Option<String>,
}

impl JsonFieldMatcher {
    pub fn new(field: Option<String>) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &str {
        self.field.as_deref().unwrap_or(DEFAULT_ORG_ID_FIELD)
    }

    fn decoded_identifier<'v>(&self, value: &'v Value) -> Option<&'v str> {
        match value {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get(self.field()).and_then(Value::as_str),
            _ => None,
        }
    }
}

impl Default for JsonFieldMatcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdentifierMatcher for JsonFieldMatcher {
    fn find<'a>(
        &self,
        signal: &str,
        entries: &'a [EnvironmentEntry],
    ) -> Option<&'a EnvironmentEntry> {
        match serde_json::from_str::<Value>(signal) {
            Ok(value) => {
                let id = self.decoded_identifier(&value)?;
                entries.iter().find(|entry| entry.identifier == id)
            }
            Err(e) => {
                log::trace!("signal is not JSON ({}), falling back to substring search", e);
                find_contained(signal, entries)
            }
        }
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::JsonField {
            field: self.field.clone(),
        }
    }

    fn name(&self) -> &str {
        "JSON Field"
    }
}
