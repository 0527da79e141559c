//! Attribute catalog errors.

/// Errors that can occur at catalog construction time.
///
/// A duplicate name would silently merge two semantically distinct
/// categories into one graph node, so it is rejected as a fatal
/// misconfiguration rather than tolerated at runtime.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate attribute name in catalog: {name}")]
    DuplicateName { name: String },
}
