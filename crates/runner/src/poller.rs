//! Badge poller - drives a detector chain from signal sources on a fixed cadence
//!
//! Each tick:
//! 1. Snapshot every lane's source (errors count as an absent signal)
//! 2. Feed the chain with the samples and the clock's `now`
//! 3. Forward any `ShowBadge`/`HideBadge` to the sink

use envbadge_core::{BadgeDecision, Signal};
use envbadge_detector::DetectorChain;
use envbadge_ports::{BadgeSink, Clock, SignalSource};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollerError {
    #[error("Unknown lane: {0}")]
    UnknownLane(String),
}

/// Counters collected while polling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStats {
    pub polls: u64,
    pub shows: u64,
    pub hides: u64,
    pub source_errors: u64,
    pub sink_errors: u64,
}

/// Polls signal sources and applies the merged decision to a sink
pub struct BadgePoller {
    chain: DetectorChain,
    /// One optional source per chain lane, by position
    sources: Vec<Option<Box<dyn SignalSource>>>,
    sink: Box<dyn BadgeSink>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    stats: PollStats,
}

impl BadgePoller {
    /// Create a poller; lanes without a bound source always see `None`
    pub fn new(
        chain: DetectorChain,
        sink: Box<dyn BadgeSink>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        let sources = chain.lanes().iter().map(|_| None).collect();
        Self {
            chain,
            sources,
            sink,
            clock,
            interval,
            stats: PollStats::default(),
        }
    }

    /// Bind a signal source to the lane named `lane`
    pub fn bind_source(
        &mut self,
        lane: &str,
        source: Box<dyn SignalSource>,
    ) -> Result<(), PollerError> {
        let index = self
            .chain
            .lanes()
            .iter()
            .position(|l| l.name == lane)
            .ok_or_else(|| PollerError::UnknownLane(lane.to_string()))?;
        log::debug!("Lane '{}' reads from {}", lane, source.name());
        self.sources[index] = Some(source);
        Ok(())
    }

    /// Run a single poll cycle and return the decision that was applied
    pub fn poll_once(&mut self) -> BadgeDecision {
        let mut samples: Vec<Signal> = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            let sample = match source {
                Some(source) => match source.read() {
                    Ok(sample) => sample,
                    Err(e) => {
                        log::warn!("Signal source {} failed: {}", source.name(), e);
                        self.stats.source_errors += 1;
                        None
                    }
                },
                None => None,
            };
            samples.push(sample);
        }
        let signals: Vec<Option<&str>> = samples.iter().map(|s| s.as_deref()).collect();

        let now = self.clock.now();
        let decision = self.chain.observe(&signals, now);
        self.stats.polls += 1;

        match &decision {
            BadgeDecision::ShowBadge { .. } => self.stats.shows += 1,
            BadgeDecision::HideBadge => self.stats.hides += 1,
            BadgeDecision::NoChange => return decision,
        }
        if let Err(e) = self.sink.apply(&decision) {
            log::warn!("Failed to apply {:?}: {}", decision, e);
            self.stats.sink_errors += 1;
        }
        decision
    }

    /// Poll on the configured interval until `shutdown` turns true
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> PollStats {
        log::info!(
            "Poller started: {} lanes, every {}ms, {}",
            self.chain.len(),
            self.interval.as_millis(),
            self.clock.name()
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll_once();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        log::info!("Poller stopped after {} polls", self.stats.polls);
        self.stats
    }

    pub fn chain(&self) -> &DetectorChain {
        &self.chain
    }

    pub fn stats(&self) -> &PollStats {
        &self.stats
    }
}
