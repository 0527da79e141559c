//! Bipartite graph subsystem — petgraph-backed two-mode graph and its builder.
//!
//! One node per record, one node per catalog attribute, an edge wherever a
//! rule matched. Strict bipartiteness is structural: edges can only be added
//! between a student key and an attribute key, so an intra-partition edge is
//! unrepresentable through the API.

pub mod builder;
pub mod types;

pub use builder::build;
pub use types::{BipartiteGraph, GraphNode, GraphStats, Partition};
