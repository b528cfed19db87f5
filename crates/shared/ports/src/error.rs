use thiserror::Error;

/// Construction-time errors for lookup tables and detectors
///
/// These are fatal: no partial detector is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate identifier in environment table: {0}")]
    DuplicateIdentifier(String),

    #[error("Identifier '{shorter}' is contained in '{longer}'; use exact matching for this table")]
    AmbiguousIdentifier { shorter: String, longer: String },

    #[error("Empty identifier in environment table")]
    EmptyIdentifier,

    #[error("Invalid suppression duration: {0}")]
    InvalidDuration(String),

    #[error("Detector chain needs at least one lane")]
    EmptyChain,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading a signal
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read signal: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signal source closed")]
    Closed,
}

/// Errors raised by a rendering surface
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to render badge: {0}")]
    Render(String),
}
