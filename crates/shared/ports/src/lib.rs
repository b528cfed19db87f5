//! Envbadge Ports
//!
//! Port definitions (traits) for environment badge detection.
//! These define the boundaries between the detection policy and the
//! embedding application (signal sources, rendering, time).

mod clock;
mod error;
mod matching;
mod sink;
mod source;

pub use clock::Clock;
pub use error::{ConfigError, ConfigResult, SinkError, SourceError};
pub use matching::IdentifierMatcher;
pub use sink::BadgeSink;
pub use source::SignalSource;
