//! # cohort-analysis
//!
//! Analysis engine for Cohort: CSV table loading, deterministic sampling,
//! the attribute rule catalog, bipartite graph assembly, and the report layer
//! (console summary + SVG export).

pub mod bipartite;
pub mod catalog;
pub mod report;
pub mod table;

pub use bipartite::{build, BipartiteGraph, GraphStats, Partition};
pub use catalog::{default_catalog, AttributeRule, Catalog};
pub use report::{GraphSummary, SvgExporter};
