// errors.rs
use thiserror::Error;

/// Failures writing the output table. Unlike fetch problems these end the
/// run: no listing can be kept without a writable sink.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
