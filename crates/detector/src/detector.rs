//! Environment detector with a debounced badge policy

use chrono::{DateTime, Duration, Utc};
use envbadge_core::{BadgeDecision, EnvironmentEntry, Timestamp};
use envbadge_matching::{IdentifierMatcher, create_matcher};
use envbadge_ports::{ConfigError, ConfigResult};

use crate::state::{DetectorPhase, DetectorState};
use crate::table::EnvironmentTable;

/// Maps signals to environments and decides when the badge may change
///
/// Driven serially by one caller; `observe` never blocks or suspends.
pub struct EnvironmentDetector {
    table: EnvironmentTable,
    matcher: Box<dyn IdentifierMatcher>,
    change_suppress: Duration,
    state: DetectorState,
}

impl EnvironmentDetector {
    /// Create a detector
    ///
    /// # Arguments
    /// * `table` - Validated lookup table (carries the matching strategy)
    /// * `initial_suppress` - Cool-down applied once, starting at `started_at`
    /// * `change_suppress` - Cool-down re-applied on every environment change
    /// * `started_at` - Construction time as seen by the caller's clock
    pub fn new(
        table: EnvironmentTable,
        initial_suppress: Duration,
        change_suppress: Duration,
        started_at: Timestamp,
    ) -> ConfigResult<Self> {
        if initial_suppress < Duration::zero() {
            return Err(ConfigError::InvalidDuration(format!(
                "initial suppression {}ms is negative",
                initial_suppress.num_milliseconds()
            )));
        }
        if change_suppress < Duration::zero() {
            return Err(ConfigError::InvalidDuration(format!(
                "change suppression {}ms is negative",
                change_suppress.num_milliseconds()
            )));
        }

        let cold_until = started_at.checked_add_signed(initial_suppress).ok_or_else(|| {
            ConfigError::InvalidDuration(format!(
                "initial suppression {}ms is out of range",
                initial_suppress.num_milliseconds()
            ))
        })?;
        if started_at.checked_add_signed(change_suppress).is_none() {
            return Err(ConfigError::InvalidDuration(format!(
                "change suppression {}ms is out of range",
                change_suppress.num_milliseconds()
            )));
        }

        let matcher = create_matcher(table.strategy());
        log::debug!(
            "Detector created: {} entries, {} matching, initial window {}ms, change window {}ms",
            table.len(),
            matcher.name(),
            initial_suppress.num_milliseconds(),
            change_suppress.num_milliseconds()
        );

        Ok(Self {
            table,
            matcher,
            change_suppress,
            state: DetectorState::cold(cold_until),
        })
    }

    /// Feed the latest signal sample and get the display decision
    pub fn observe(&mut self, signal: Option<&str>, now: Timestamp) -> BadgeDecision {
        if self.state.last_signal.as_deref() == signal {
            return self.release_if_due(now);
        }
        self.state.last_signal = signal.map(str::to_owned);

        let candidate = self.resolve(signal).cloned();
        let unchanged = match (&candidate, &self.state.resolved_environment) {
            (Some(a), Some(b)) => a.same_environment(b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return self.release_if_due(now);
        }

        log::info!(
            "Environment changed: {} -> {}",
            describe(self.state.resolved_environment.as_ref()),
            describe(candidate.as_ref())
        );
        self.state.resolved_environment = candidate.clone();
        self.state.pending_environment = candidate;
        self.state.decision_owed = true;

        // The initial window governs until it has run out
        if now >= self.state.cold_until {
            let until = now
                .checked_add_signed(self.change_suppress)
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            self.state.suppress_until = Some(until);
        }

        self.release_if_due(now)
    }

    /// Match a signal against the table without touching state
    pub fn resolve(&self, signal: Option<&str>) -> Option<&EnvironmentEntry> {
        signal.and_then(|s| self.matcher.find(s, self.table.entries()))
    }

    /// Turn an owed resolution into a terminal decision once suppression ends
    fn release_if_due(&mut self, now: Timestamp) -> BadgeDecision {
        if !self.state.decision_owed {
            return BadgeDecision::NoChange;
        }
        if self.state.is_suppressed(now) {
            log::debug!(
                "Badge update for {} suppressed until {:?}",
                describe(self.state.pending_environment.as_ref()),
                self.state.suppress_until
            );
            return BadgeDecision::NoChange;
        }

        self.state.decision_owed = false;
        self.state.pending_environment = None;
        let badge = self
            .state
            .resolved_environment
            .as_ref()
            .and_then(EnvironmentEntry::badge);
        self.state.displayed = badge.clone();

        match &badge {
            Some(b) => log::info!("Badge displayed: {}", b),
            None => log::info!("Badge hidden"),
        }
        BadgeDecision::render(badge)
    }

    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    pub fn phase(&self, now: Timestamp) -> DetectorPhase {
        self.state.phase(now)
    }

    pub fn resolved(&self) -> Option<&EnvironmentEntry> {
        self.state.resolved_environment.as_ref()
    }

    pub fn badge_visible(&self) -> bool {
        self.state.badge_visible()
    }

    /// Whether a withheld decision is still waiting for its window to end
    pub fn owes_decision(&self) -> bool {
        self.state.decision_owed
    }

    pub fn table(&self) -> &EnvironmentTable {
        &self.table
    }
}

fn describe(entry: Option<&EnvironmentEntry>) -> String {
    match entry {
        Some(e) => format!("{} ({})", e.label, e.identifier),
        None => "unknown".to_string(),
    }
}
