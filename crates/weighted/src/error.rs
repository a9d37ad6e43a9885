use std::io;

use thiserror::Error;

/// Failure raised by a record factory while building one record.
///
/// The store attaches the source line before surfacing it as a
/// [`DataFileError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },
    #[error("invalid value for field '{field}': {value:?}")]
    InvalidField { field: &'static str, value: String },
}

impl RecordError {
    /// Pins this error to the 1-based source line it came from.
    pub fn at_line(self, line: usize) -> DataFileError {
        match self {
            RecordError::FieldCountMismatch { expected, found } => {
                DataFileError::FieldCountMismatch {
                    line,
                    expected,
                    found,
                }
            }
            RecordError::InvalidField { field, value } => {
                DataFileError::InvalidField { line, field, value }
            }
        }
    }
}

/// Errors from building or reading a [`WeightedDataFile`](crate::WeightedDataFile).
#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: malformed weight {value:?}")]
    MalformedWeight { line: usize, value: String },
    #[error("line {line}: expected {expected} fields after the weight, found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid value for field '{field}': {value:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: weight {weight} exceeds available index capacity")]
    CapacityExceeded { line: usize, weight: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
