//! # cohort-core
//!
//! Core types, errors, and configuration for the Cohort analysis engine.
//! Provides the `Record`/`Table` data model, value normalization, one error
//! enum per subsystem, and the layered TOML configuration.

pub mod config;
pub mod errors;
pub mod record;

pub use config::CohortConfig;
pub use record::{normalize_value, Record, Table};
