use envbadge_core::{Badge, BadgeDecision};

use crate::error::SinkError;

/// Port for the rendering surface that draws the badge overlay
pub trait BadgeSink: Send {
    /// Create or update the overlay
    fn show(&mut self, badge: &Badge) -> Result<(), SinkError>;

    /// Remove the overlay (no-op when nothing is shown)
    fn hide(&mut self) -> Result<(), SinkError>;

    /// Apply a detector decision; `NoChange` does nothing
    fn apply(&mut self, decision: &BadgeDecision) -> Result<(), SinkError> {
        match decision {
            BadgeDecision::ShowBadge { label, color } => self.show(&Badge {
                label: label.clone(),
                color: color.clone(),
            }),
            BadgeDecision::HideBadge => self.hide(),
            BadgeDecision::NoChange => Ok(()),
        }
    }
}
