//! Top-level Cohort configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OutputConfig, SampleConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COHORT_*`)
/// 3. Project config (`cohort.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CohortConfig {
    pub sample: SampleConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sample_percentage: Option<f64>,
    pub sample_seed: Option<u64>,
    pub svg_path: Option<String>,
    pub svg: Option<bool>,
}

impl CohortConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest above defaults): project config
        let project_config_path = root.join("cohort.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CohortConfig) -> Result<(), ConfigError> {
        if let Some(pct) = config.sample.percentage {
            if !(0.0..=100.0).contains(&pct) || !pct.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "sample.percentage".to_string(),
                    message: "must be a number between 0 and 100".to_string(),
                });
            }
        }
        if let Some(ref path) = config.output.svg_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.svg_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CohortConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: CohortConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CohortConfig, other: &CohortConfig) {
        if other.sample.percentage.is_some() {
            base.sample.percentage = other.sample.percentage;
        }
        if other.sample.seed.is_some() {
            base.sample.seed = other.sample.seed;
        }
        if other.output.svg_path.is_some() {
            base.output.svg_path = other.output.svg_path.clone();
        }
        if other.output.svg.is_some() {
            base.output.svg = other.output.svg;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COHORT_SAMPLE_PERCENTAGE`, `COHORT_SAMPLE_SEED`, etc.
    fn apply_env_overrides(config: &mut CohortConfig) {
        if let Ok(val) = std::env::var("COHORT_SAMPLE_PERCENTAGE") {
            if let Ok(v) = val.parse::<f64>() {
                config.sample.percentage = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COHORT_SAMPLE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.sample.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COHORT_SVG_PATH") {
            config.output.svg_path = Some(val);
        }
        if let Ok(val) = std::env::var("COHORT_SVG") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.svg = Some(v);
            }
        }
    }

    /// Apply CLI flag overrides (highest priority).
    fn apply_cli_overrides(config: &mut CohortConfig, cli: &CliOverrides) {
        if cli.sample_percentage.is_some() {
            config.sample.percentage = cli.sample_percentage;
        }
        if cli.sample_seed.is_some() {
            config.sample.seed = cli.sample_seed;
        }
        if cli.svg_path.is_some() {
            config.output.svg_path = cli.svg_path.clone();
        }
        if cli.svg.is_some() {
            config.output.svg = cli.svg;
        }
    }
}
