//! Signal source adapters
//!
//! Stand-ins for the browser-side collaborators (storage key, DOM text,
//! cached API result). Every read is a snapshot; the latest sample wins.

use envbadge_core::Signal;
use envbadge_ports::{SignalSource, SourceError};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::watch;

/// Reads the signal from a file, e.g. a dumped storage value
///
/// A missing or blank file is an absent signal, not an error.
pub struct FileSignalSource {
    path: PathBuf,
    name: String,
}

impl FileSignalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

impl SignalSource for FileSignalSource {
    fn read(&mut self) -> Result<Signal, SourceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Latest value published on a tokio `watch` channel
///
/// Lets an async producer (network monitor, page bridge) push samples while
/// the poller keeps its own cadence.
pub struct WatchSignalSource {
    rx: watch::Receiver<Signal>,
    name: String,
}

impl WatchSignalSource {
    pub fn new(rx: watch::Receiver<Signal>, name: impl Into<String>) -> Self {
        Self {
            rx,
            name: name.into(),
        }
    }

    /// Create a connected sender/source pair starting with no signal
    pub fn channel(name: impl Into<String>) -> (watch::Sender<Signal>, Self) {
        let (tx, rx) = watch::channel(None);
        (tx, Self::new(rx, name))
    }
}

impl SignalSource for WatchSignalSource {
    fn read(&mut self) -> Result<Signal, SourceError> {
        if self.rx.has_changed().is_err() {
            return Err(SourceError::Closed);
        }
        Ok(self.rx.borrow_and_update().clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed signal, for pinning a lane from the command line
pub struct StaticSignalSource {
    signal: Signal,
}

impl StaticSignalSource {
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }
}

impl SignalSource for StaticSignalSource {
    fn read(&mut self) -> Result<Signal, SourceError> {
        Ok(self.signal.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
