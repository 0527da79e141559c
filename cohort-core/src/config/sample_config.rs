//! Sampling configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the record subsampling step.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SampleConfig {
    /// Percentage of records to keep, in [0, 100]. Default: 100 (no sampling).
    pub percentage: Option<f64>,
    /// RNG seed for deterministic subsets. Default: 42.
    pub seed: Option<u64>,
}

impl SampleConfig {
    /// Returns the effective sample percentage, defaulting to 100.
    pub fn effective_percentage(&self) -> f64 {
        self.percentage.unwrap_or(100.0)
    }

    /// Returns the effective seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }
}
