//! Rendering/export errors.

/// Errors that can occur while writing the SVG export.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write '{path}': {message}")]
    Io { path: String, message: String },
}
