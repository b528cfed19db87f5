use envbadge_core::Timestamp;

/// Source of `now` for the poller
///
/// Detectors never read time themselves; whoever drives them asks a `Clock`
/// and passes the result to `observe`. Readings must not go backwards or
/// suppression windows could stretch.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Label used in poller logs
    fn name(&self) -> &str {
        "Clock"
    }
}
