//! Report layer — console/JSON summary and SVG export.
//!
//! Everything here consumes a finished `&BipartiteGraph` and generates
//! strings; no rendering state leaks back into the graph.

pub mod summary;
pub mod svg;

pub use summary::GraphSummary;
pub use svg::SvgExporter;
