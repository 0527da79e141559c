//! Table loading errors.

/// Errors that can occur while reading the source CSV into a table.
///
/// These are input errors: detected before classification begins and
/// reported to the user with a non-zero exit.
/// Per-field parse failures during predicate evaluation are NOT represented
/// here — they silently degrade to non-membership.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("File '{path}' has no header row")]
    EmptyFile { path: String },

    #[error("Required column '{column}' missing from header")]
    MissingColumn { column: String },
}
