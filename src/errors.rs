use thiserror::Error;

/// Errors raised by the fallible skin of the crate: parameter loading and
/// validation, and the dimension prechecks guarding a kinetics update. The
/// stage math itself is infallible; malformed numerics propagate as NaN/inf.
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Mismatched dimensions: {0}")]
    MismatchedDimensions(String),
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
