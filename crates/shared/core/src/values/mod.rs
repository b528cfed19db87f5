use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Opaque matching key: an org id, an org name or a hostname
pub type Identifier = String;

/// Raw per-poll sample handed to a detector (`None` when the source had nothing)
pub type Signal = Option<String>;
