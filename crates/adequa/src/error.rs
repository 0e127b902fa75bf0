//! Error types for the adequa library.

use thiserror::Error;

/// Main error type for descriptor validation and period resolution.
#[derive(Debug, Error)]
pub enum AdequaError {
    /// A field's runtime type disagrees with its declared schema type.
    #[error("{context}: field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
        context: String,
    },

    /// A required schema field is absent from the raw parameters.
    #[error("{context}: missing required field '{field}'")]
    MissingField {
        field: &'static str,
        context: String,
    },

    /// The requested analysis kind is not in the catalog.
    #[error("unknown analysis type '{value}', valid choices: {valid}")]
    UnknownAnalysisType { value: String, valid: String },

    /// The requested data type is not in the supplied catalog.
    #[error("unknown data type '{value}', valid choices: {valid}")]
    UnknownDataType { value: String, valid: String },

    /// A period bound could not be parsed with the fixed date format.
    #[error("invalid date '{value}' for {field}: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Explicit period end not strictly after the explicit start.
    ///
    /// Fatal: a request with an impossible window cannot proceed meaningfully,
    /// so the calling layer must translate this into a non-zero exit rather
    /// than attempt recovery.
    #[error("period end {end} is not strictly after period start {start}")]
    InvalidPeriodRange { start: String, end: String },

    /// Error reading or parsing a raw parameter file.
    #[error("params error: {0}")]
    Params(String),
}

impl AdequaError {
    /// True for errors the calling layer is required to treat as unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AdequaError::InvalidPeriodRange { .. })
    }
}

/// Result type alias for adequa operations.
pub type Result<T> = std::result::Result<T, AdequaError>;
