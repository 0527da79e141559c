//! Pipeline errors.

use super::{CatalogError, ConfigError, LoadError, RenderError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
///
/// A run is all-or-nothing: it either completes with a full graph or aborts
/// before classification starts, so there is no partial-result collection.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
