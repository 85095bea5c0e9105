//! Shared error types for drivecheck operations.

use thiserror::Error;

/// Main error type for questionnaire operations.
///
/// Validation errors surface before any scoring arithmetic runs and are never
/// silently defaulted. Configuration errors are fatal at startup. Store I/O
/// failures pass through untouched; there is no retry layer here.
#[derive(Debug, Error)]
pub enum DriveCheckError {
    /// A configured question has no answer.
    #[error("missing answer for question '{0}'")]
    MissingAnswer(String),

    /// An answer was supplied for a question the survey does not define.
    #[error("answer supplied for unknown question '{0}'")]
    UnknownQuestion(String),

    /// An answer lies outside its question's scale.
    #[error("answer {value} for '{key}' is outside the {min}..={max} scale")]
    OutOfRange {
        key: String,
        value: u8,
        min: u8,
        max: u8,
    },

    /// Malformed survey definition (weights, thresholds, brackets).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The computed comparator found no records in the age window. A value-
    /// level signal so callers can render a friendly fallback.
    #[error("not enough records near age {age} (±{window}) for a comparison")]
    InsufficientData { age: u32, window: u32 },

    /// Store row that cannot be interpreted as a submission.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// Wrapped I/O errors from the record store.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped CSV errors from the flat-file store.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapped JSON errors from the line-delimited store.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DriveCheckError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// True for the error classes a caller should report as bad input rather
    /// than as an internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingAnswer(_) | Self::UnknownQuestion(_) | Self::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DriveCheckError>;
