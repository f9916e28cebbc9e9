use thiserror::Error;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_MISSING_PREFIX: &str = "Missing";
const MSG_UNRESOLVABLE_PREFIX: &str = "Cannot resolve";

/// Result type for the `jsonpaths` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Error categories surfaced by the pipeline around the path extractor.
///
/// The extractor and the path tree themselves never fail; these errors come
/// from reading, parsing, dereferencing and serializing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// File read or write failed
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Catch-all with a preformatted message
    #[error("{0}")]
    General(String),

    /// Input text was not valid JSON
    #[error("JSON parsing failed: {0}")]
    Json(String),

    /// Neither a file nor stdin provided any input
    #[error("No input provided: {0}")]
    MissingInput(String),

    /// A `$ref` could not be dereferenced
    #[error("Reference resolution failed: {0}")]
    ReferenceResolution(String),

    /// Output could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a "Failed to X" error
    #[must_use]
    pub fn failed_to(action: &str, details: impl std::fmt::Display) -> Self {
        Self::General(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Create a "Missing X" error
    #[must_use]
    pub fn missing(what: &str) -> Self {
        Self::MissingInput(format!("{MSG_MISSING_PREFIX} {what}"))
    }

    /// Create a "Cannot resolve X" error for a `$ref` target
    #[must_use]
    pub fn unresolvable(reference: &str, reason: impl std::fmt::Display) -> Self {
        Self::ReferenceResolution(format!("{MSG_UNRESOLVABLE_PREFIX} '{reference}': {reason}"))
    }

    /// Create error for IO operations
    #[must_use]
    pub fn io_failed(
        operation: &str,
        path: &std::path::Path,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::FileOperation(format!(
            "{MSG_FAILED_TO_PREFIX} {operation} {}: {error}",
            path.display()
        ))
    }
}
