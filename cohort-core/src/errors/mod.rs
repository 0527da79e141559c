//! Error handling for Cohort.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod load_error;
pub mod pipeline_error;
pub mod render_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use load_error::LoadError;
pub use pipeline_error::PipelineError;
pub use render_error::RenderError;
