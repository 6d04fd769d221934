//! Error types for plainsql.

use thiserror::Error;

use crate::ast::OperationKind;

/// Everything that can go wrong while translating one request.
///
/// The facade renders each variant as an `Error: …` string, so the wording
/// here is the wording callers see. None of these ever escape
/// [`generate_query`](crate::generate_query) as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// No operation trigger word occurred anywhere in the text.
    #[error("Could not identify the operation type")]
    UnrecognizedOperation,

    /// The operation-specific table pattern found nothing.
    #[error("Could not identify table name")]
    TableNotFound,

    /// The CREATE path found zero usable column tokens.
    #[error("No columns identified")]
    NoColumnsFound,

    /// A join word was present but the joined tables were not identifiable.
    /// The SELECT builder absorbs this one; it never reaches the facade.
    #[error("Could not identify tables to join")]
    JoinTablesNotFound,

    /// The request classified as a kind with no statement of its own.
    #[error("Unsupported operation")]
    UnsupportedOperation(OperationKind),

    /// Catch-all for failures that should not happen.
    #[error("Unable to generate query - {0}")]
    Internal(String),
}

/// Result type alias for translation steps.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TranslateError::UnrecognizedOperation.to_string(),
            "Could not identify the operation type"
        );
        assert_eq!(
            TranslateError::TableNotFound.to_string(),
            "Could not identify table name"
        );
        assert_eq!(
            TranslateError::UnsupportedOperation(OperationKind::Join).to_string(),
            "Unsupported operation"
        );
        assert_eq!(
            TranslateError::Internal("missing capture".into()).to_string(),
            "Unable to generate query - missing capture"
        );
    }
}
