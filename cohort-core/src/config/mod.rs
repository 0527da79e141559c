//! Configuration system for Cohort.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod cohort_config;
pub mod output_config;
pub mod sample_config;

pub use cohort_config::{CliOverrides, CohortConfig};
pub use output_config::OutputConfig;
pub use sample_config::SampleConfig;
