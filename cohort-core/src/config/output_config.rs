//! Output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for summary and SVG output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Path for the SVG export. Default: `bipartite_graph.svg`.
    pub svg_path: Option<String>,
    /// Whether to write the SVG at all. Default: true.
    pub svg: Option<bool>,
}

impl OutputConfig {
    /// Returns the effective SVG path, defaulting to `bipartite_graph.svg`.
    pub fn effective_svg_path(&self) -> &str {
        self.svg_path.as_deref().unwrap_or("bipartite_graph.svg")
    }

    /// Returns whether SVG export is enabled, defaulting to true.
    pub fn effective_svg(&self) -> bool {
        self.svg.unwrap_or(true)
    }
}
