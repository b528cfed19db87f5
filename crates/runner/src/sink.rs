//! Badge sink adapters

use envbadge_core::Badge;
use envbadge_ports::{BadgeSink, SinkError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Writes every display change to the log
#[derive(Debug, Default)]
pub struct LogBadgeSink;

impl LogBadgeSink {
    pub fn new() -> Self {
        Self
    }
}

impl BadgeSink for LogBadgeSink {
    fn show(&mut self, badge: &Badge) -> Result<(), SinkError> {
        log::info!("[badge] SHOW {}", badge);
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SinkError> {
        log::info!("[badge] HIDE");
        Ok(())
    }
}

/// Overlay state as last rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Badge currently on screen
    pub current: Option<Badge>,
    /// Number of show operations applied
    pub shows: usize,
    /// Number of hide operations applied
    pub hides: usize,
}

/// In-memory rendering surface
///
/// Clones share the same overlay, so one handle can be given to the poller
/// and another kept for reading.
#[derive(Debug, Clone, Default)]
pub struct MemoryBadgeSink {
    overlay: Arc<Mutex<Overlay>>,
}

impl MemoryBadgeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Overlay {
        self.overlay.lock().clone()
    }

    pub fn current(&self) -> Option<Badge> {
        self.overlay.lock().current.clone()
    }
}

impl BadgeSink for MemoryBadgeSink {
    fn show(&mut self, badge: &Badge) -> Result<(), SinkError> {
        let mut overlay = self.overlay.lock();
        overlay.current = Some(badge.clone());
        overlay.shows += 1;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SinkError> {
        let mut overlay = self.overlay.lock();
        overlay.current = None;
        overlay.hides += 1;
        Ok(())
    }
}
