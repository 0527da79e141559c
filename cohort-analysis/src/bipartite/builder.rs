//! Graph builder — dense records × rules scan, parallel match collection.

use rayon::prelude::*;

use cohort_core::record::Table;

use crate::catalog::Catalog;

use super::types::BipartiteGraph;

/// Build the bipartite graph from a record table and an attribute catalog.
///
/// Every record is evaluated against every rule; predicates are independent
/// and cheap, so no shortcutting. The scan has no cross-record dependencies:
/// rayon partitions the records and each worker emits a local match list,
/// which is merged into the graph single-threaded. Node order is record
/// input order followed by catalog order, so rebuilding the same input
/// yields an identical graph.
pub fn build(table: &Table, catalog: &Catalog) -> BipartiteGraph {
    let matches: Vec<(usize, usize)> = table
        .records()
        .par_iter()
        .enumerate()
        .flat_map_iter(|(row, record)| {
            catalog
                .rules()
                .iter()
                .enumerate()
                .filter_map(move |(col, rule)| rule.matches(record).then_some((row, col)))
        })
        .collect();

    let mut graph = BipartiteGraph::new();

    // All records become nodes, matched or not.
    for record in table.records() {
        graph.add_student(record.id());
    }
    // The full catalog is instantiated even when an attribute gets no edges.
    for rule in catalog.rules() {
        graph.add_attribute(&rule.name);
    }
    for (row, col) in matches {
        graph.add_edge(table.records()[row].id(), &catalog.rules()[col].name);
    }

    let stats = graph.stats();
    tracing::info!(
        students = stats.students,
        attributes = stats.attributes,
        edges = stats.edges,
        isolated_attributes = stats.isolated_attributes,
        "bipartite graph built"
    );

    graph
}
