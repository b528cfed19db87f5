use envbadge_core::Signal;

use crate::error::SourceError;

/// Port for the upstream signal (storage key, DOM text, cached API result)
///
/// A read is a cheap snapshot; it must be callable at the poll interval.
pub trait SignalSource: Send {
    /// Take a snapshot of the current signal
    fn read(&mut self) -> Result<Signal, SourceError>;

    fn name(&self) -> &str {
        "SignalSource"
    }
}
