//! Detector state and derived phase

use envbadge_core::{Badge, EnvironmentEntry, Signal, Timestamp};

/// Mutable state owned by one [`crate::EnvironmentDetector`]
///
/// Only `observe` mutates it; callers get read-only access for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorState {
    /// Last raw signal seen (`None` when the source had nothing)
    pub last_signal: Signal,
    /// Environment the latest signal resolved to
    pub resolved_environment: Option<EnvironmentEntry>,
    /// Environment whose display decision is still withheld by suppression
    pub pending_environment: Option<EnvironmentEntry>,
    /// Display is frozen while `now < suppress_until`
    pub suppress_until: Option<Timestamp>,
    /// End of the cool-down applied once at construction
    pub cold_until: Timestamp,
    /// A resolution change has not been turned into a decision yet
    pub decision_owed: bool,
    /// Badge the caller was last told to show
    pub displayed: Option<Badge>,
}

impl DetectorState {
    pub(crate) fn cold(cold_until: Timestamp) -> Self {
        Self {
            last_signal: None,
            resolved_environment: None,
            pending_environment: None,
            suppress_until: Some(cold_until),
            cold_until,
            decision_owed: false,
            displayed: None,
        }
    }

    pub fn badge_visible(&self) -> bool {
        self.displayed.is_some()
    }

    pub fn is_suppressed(&self, now: Timestamp) -> bool {
        self.suppress_until.is_some_and(|deadline| now < deadline)
    }

    pub fn phase(&self, now: Timestamp) -> DetectorPhase {
        if now < self.cold_until {
            DetectorPhase::Cold
        } else if self.is_suppressed(now) {
            DetectorPhase::Suppressed
        } else {
            DetectorPhase::Settled
        }
    }
}

/// Coarse lifecycle phase derived from state and the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorPhase {
    /// Inside the initial cool-down after construction
    Cold,
    /// Inside a change window; display is frozen
    Suppressed,
    /// Display reflects (or is about to reflect) the resolved environment
    Settled,
}
