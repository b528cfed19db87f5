use serde::{Deserialize, Serialize};
use std::fmt;

/// What is drawn on screen for a non-production environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.color)
    }
}

/// Instruction returned to the rendering collaborator after each observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeDecision {
    /// Create or update the overlay
    ShowBadge { label: String, color: String },
    /// Remove the overlay
    HideBadge,
    /// Leave the current display untouched
    NoChange,
}

impl BadgeDecision {
    pub fn show(badge: Badge) -> Self {
        BadgeDecision::ShowBadge {
            label: badge.label,
            color: badge.color,
        }
    }

    /// Decision that renders `display` (`None` = hidden)
    pub fn render(display: Option<Badge>) -> Self {
        match display {
            Some(badge) => Self::show(badge),
            None => BadgeDecision::HideBadge,
        }
    }

    pub fn is_no_change(&self) -> bool {
        matches!(self, BadgeDecision::NoChange)
    }

    /// The badge this decision displays, if it is a `ShowBadge`
    pub fn badge(&self) -> Option<Badge> {
        match self {
            BadgeDecision::ShowBadge { label, color } => Some(Badge {
                label: label.clone(),
                color: color.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hidden() {
        assert_eq!(BadgeDecision::render(None), BadgeDecision::HideBadge);
    }

    #[test]
    fn test_render_badge() {
        let badge = Badge {
            label: "TEST".to_string(),
            color: "orange".to_string(),
        };
        let decision = BadgeDecision::render(Some(badge.clone()));
        assert_eq!(decision.badge(), Some(badge));
        assert!(!decision.is_no_change());
    }
}
