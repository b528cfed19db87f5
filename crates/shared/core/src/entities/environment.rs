use serde::{Deserialize, Serialize};

use super::Badge;
use crate::values::Identifier;

/// One row of an environment lookup table
///
/// `color == None` marks the environment that never shows a badge
/// (production).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentEntry {
    /// Matching key (org id, org name or hostname)
    pub identifier: Identifier,
    /// Text shown on the badge, e.g. "DR"
    pub label: String,
    /// Badge background color, `None` for production
    #[serde(default)]
    pub color: Option<String>,
}

impl EnvironmentEntry {
    /// Entry for an environment that shows a badge
    pub fn badged(
        identifier: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            color: Some(color.into()),
        }
    }

    /// Entry for an environment that never shows a badge
    pub fn silent(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            color: None,
        }
    }

    /// Whether this environment is displayed with a badge
    pub fn shows_badge(&self) -> bool {
        self.color.is_some()
    }

    /// The badge this entry displays, if any
    pub fn badge(&self) -> Option<Badge> {
        self.color.as_ref().map(|color| Badge {
            label: self.label.clone(),
            color: color.clone(),
        })
    }

    /// Identity comparison used by the detector (label and color are ignored)
    pub fn same_environment(&self, other: &EnvironmentEntry) -> bool {
        self.identifier == other.identifier
    }
}
