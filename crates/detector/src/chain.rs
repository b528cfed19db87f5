//! Priority merge of several detectors
//!
//! Each lane runs one detector over one signal strategy (DOM org name,
//! storage org id, hostname, ...). The first lane that resolves an
//! environment is authoritative; lower lanes are fallbacks.

use envbadge_core::{Badge, BadgeDecision, Timestamp};
use envbadge_ports::{ConfigError, ConfigResult};

use crate::detector::EnvironmentDetector;
use crate::state::DetectorPhase;

/// A named detector inside a chain
pub struct Lane {
    pub name: String,
    pub detector: EnvironmentDetector,
}

impl Lane {
    pub fn new(name: impl Into<String>, detector: EnvironmentDetector) -> Self {
        Self {
            name: name.into(),
            detector,
        }
    }
}

/// Ordered set of detectors merged into one display decision
///
/// Emits `ShowBadge`/`HideBadge` only when the merged display actually
/// changes; the overlay is assumed absent at start.
pub struct DetectorChain {
    lanes: Vec<Lane>,
    displayed: Option<Badge>,
}

impl DetectorChain {
    /// Build a chain; the first lane has the highest priority
    pub fn new(lanes: Vec<Lane>) -> ConfigResult<Self> {
        if lanes.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(Self {
            lanes,
            displayed: None,
        })
    }

    /// Feed one signal per lane (by position; missing ones count as `None`)
    pub fn observe(&mut self, signals: &[Option<&str>], now: Timestamp) -> BadgeDecision {
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            let signal = signals.get(i).copied().flatten();
            lane.detector.observe(signal, now);
        }

        if self
            .lanes
            .iter()
            .any(|lane| lane.detector.phase(now) == DetectorPhase::Cold)
        {
            return BadgeDecision::NoChange;
        }

        // Walk lanes by priority: a lane still holding back a decision freezes
        // the display, the first resolved lane decides it.
        let mut target = None;
        for lane in &self.lanes {
            if lane.detector.owes_decision() {
                log::debug!("Lane '{}' is suppressed, display frozen", lane.name);
                return BadgeDecision::NoChange;
            }
            if let Some(entry) = lane.detector.resolved() {
                target = entry.badge();
                break;
            }
        }

        if target == self.displayed {
            return BadgeDecision::NoChange;
        }
        self.displayed = target.clone();
        BadgeDecision::render(target)
    }

    /// Name of the lane currently deciding the display
    pub fn authority(&self) -> Option<&str> {
        self.lanes
            .iter()
            .find(|lane| lane.detector.resolved().is_some())
            .map(|lane| lane.name.as_str())
    }

    pub fn displayed(&self) -> Option<&Badge> {
        self.displayed.as_ref()
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, name: &str) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.name == name)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EnvironmentTable;
    use chrono::{Duration, TimeZone, Utc};
    use envbadge_core::{EnvironmentEntry, MatchStrategy};

    fn t(ms: i64) -> Timestamp {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn org_name_lane() -> Lane {
        let table = EnvironmentTable::new(
            MatchStrategy::Exact,
            vec![
                EnvironmentEntry::badged("wawanesa-dr", "DR", "red"),
                EnvironmentEntry::badged("wawanesa-test", "TEST", "orange"),
                EnvironmentEntry::silent("wawanesa", "PROD"),
            ],
        )
        .unwrap();
        let detector = EnvironmentDetector::new(
            table,
            Duration::milliseconds(1000),
            Duration::milliseconds(500),
            t(0),
        )
        .unwrap();
        Lane::new("org-name", detector)
    }

    fn org_id_lane() -> Lane {
        let table = EnvironmentTable::new(
            MatchStrategy::JsonField { field: None },
            vec![
                EnvironmentEntry::badged("d6154e9b-1f7a-40a4-9f06-e3a4c73fc4ac", "DR", "red"),
                EnvironmentEntry::badged("a7cbe8fc-fe81-47bc-bdd3-05a726c56c5a", "DEV", "blue"),
            ],
        )
        .unwrap();
        let detector = EnvironmentDetector::new(
            table,
            Duration::milliseconds(1000),
            Duration::milliseconds(500),
            t(0),
        )
        .unwrap();
        Lane::new("org-id", detector)
    }

    const DEV_TOKEN: &str = r#"{"orgId":"a7cbe8fc-fe81-47bc-bdd3-05a726c56c5a"}"#;

    fn show(label: &str, color: &str) -> BadgeDecision {
        BadgeDecision::ShowBadge {
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_empty_chain_rejected() {
        assert_eq!(DetectorChain::new(vec![]).err(), Some(ConfigError::EmptyChain));
    }

    #[test]
    fn test_cold_chain_is_silent() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        assert_eq!(chain.observe(&[None, None], t(0)), BadgeDecision::NoChange);
        assert_eq!(
            chain.observe(&[Some("wawanesa-dr"), None], t(500)),
            BadgeDecision::NoChange
        );
        assert_eq!(
            chain.observe(&[Some("wawanesa-dr"), None], t(1000)),
            show("DR", "red")
        );
        assert_eq!(chain.authority(), Some("org-name"));
    }

    #[test]
    fn test_primary_lane_wins() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        chain.observe(&[Some("wawanesa-test"), Some(DEV_TOKEN)], t(0));
        assert_eq!(
            chain.observe(&[Some("wawanesa-test"), Some(DEV_TOKEN)], t(1000)),
            show("TEST", "orange")
        );
        assert_eq!(chain.displayed().unwrap().label, "TEST");
    }

    #[test]
    fn test_fallback_lane_when_primary_empty() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        chain.observe(&[None, Some(DEV_TOKEN)], t(0));
        assert_eq!(
            chain.observe(&[None, Some(DEV_TOKEN)], t(1000)),
            show("DEV", "blue")
        );
        assert_eq!(chain.authority(), Some("org-id"));
    }

    #[test]
    fn test_primary_losing_signal_freezes_then_falls_back() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        chain.observe(&[Some("wawanesa-dr"), Some(DEV_TOKEN)], t(0));
        assert_eq!(
            chain.observe(&[Some("wawanesa-dr"), Some(DEV_TOKEN)], t(1000)),
            show("DR", "red")
        );

        // org-name lane blanks out during navigation
        assert_eq!(
            chain.observe(&[None, Some(DEV_TOKEN)], t(1100)),
            BadgeDecision::NoChange
        );
        assert_eq!(
            chain.observe(&[None, Some(DEV_TOKEN)], t(1599)),
            BadgeDecision::NoChange
        );
        assert_eq!(
            chain.observe(&[None, Some(DEV_TOKEN)], t(1600)),
            show("DEV", "blue")
        );
    }

    #[test]
    fn test_production_hides_and_dedups() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        chain.observe(&[Some("wawanesa"), None], t(0));
        // already hidden: nothing to do
        assert_eq!(
            chain.observe(&[Some("wawanesa"), None], t(1000)),
            BadgeDecision::NoChange
        );
        assert!(chain.displayed().is_none());
        assert_eq!(chain.authority(), Some("org-name"));
    }

    #[test]
    fn test_missing_signals_count_as_none() {
        let mut chain = DetectorChain::new(vec![org_name_lane(), org_id_lane()]).unwrap();
        chain.observe(&[Some("wawanesa-dr")], t(0));
        assert_eq!(chain.observe(&[Some("wawanesa-dr")], t(1000)), show("DR", "red"));
        assert!(chain.lane("org-id").unwrap().detector.resolved().is_none());
    }
}
