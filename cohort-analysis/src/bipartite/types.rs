//! Bipartite graph types — node partitions, the graph wrapper, stats.

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Which side of the bipartition a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    /// A record node, keyed by the record identifier.
    Student,
    /// An attribute category node, keyed by the attribute name.
    Attribute,
}

/// Node payload: the key plus its partition.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub key: String,
    pub partition: Partition,
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraphStats {
    pub students: usize,
    pub attributes: usize,
    pub edges: usize,
    /// Attribute nodes that received no edges.
    pub isolated_attributes: usize,
}

/// A two-mode graph over students and attributes.
///
/// Node and edge insertion is idempotent, edges form a mathematical set.
/// The builder is the only writer; everything downstream takes `&self`.
#[derive(Debug)]
pub struct BipartiteGraph {
    graph: Graph<GraphNode, (), Undirected>,
    student_index: FxHashMap<String, NodeIndex>,
    attribute_index: FxHashMap<String, NodeIndex>,
}

impl Default for BipartiteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new_undirected(),
            student_index: FxHashMap::default(),
            attribute_index: FxHashMap::default(),
        }
    }

    /// Insert a student node if absent; returns its index either way.
    pub(crate) fn add_student(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.student_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            key: id.to_string(),
            partition: Partition::Student,
        });
        self.student_index.insert(id.to_string(), idx);
        idx
    }

    /// Insert an attribute node if absent; returns its index either way.
    pub(crate) fn add_attribute(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.attribute_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            key: name.to_string(),
            partition: Partition::Attribute,
        });
        self.attribute_index.insert(name.to_string(), idx);
        idx
    }

    /// Insert-if-absent edge between a student and an attribute.
    /// Taking the two keys by partition makes same-partition edges
    /// unrepresentable.
    pub(crate) fn add_edge(&mut self, student_id: &str, attribute: &str) {
        let s = self.add_student(student_id);
        let a = self.add_attribute(attribute);
        if self.graph.find_edge(s, a).is_none() {
            self.graph.add_edge(s, a, ());
        }
    }

    /// Student identifiers in insertion (input) order.
    pub fn student_ids(&self) -> Vec<&str> {
        self.nodes_in(Partition::Student)
    }

    /// Attribute names in insertion (catalog) order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.nodes_in(Partition::Attribute)
    }

    fn nodes_in(&self, partition: Partition) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].partition == partition)
            .map(|idx| self.graph[idx].key.as_str())
            .collect()
    }

    /// All edges as `(student_id, attribute_name)` pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| {
                let (na, nb) = (&self.graph[a], &self.graph[b]);
                if na.partition == Partition::Student {
                    (na.key.as_str(), nb.key.as_str())
                } else {
                    (nb.key.as_str(), na.key.as_str())
                }
            })
            .collect()
    }

    /// Total node count across both partitions.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Total edge count.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Degree of the node with the given key, in either partition.
    pub fn degree(&self, key: &str) -> Option<usize> {
        let idx = self
            .student_index
            .get(key)
            .or_else(|| self.attribute_index.get(key))?;
        Some(self.graph.neighbors(*idx).count())
    }

    /// Verify strict bipartiteness: every edge must span the two partitions.
    pub fn is_bipartite(&self) -> bool {
        self.graph.edge_indices().all(|e| {
            self.graph
                .edge_endpoints(e)
                .is_some_and(|(a, b)| self.graph[a].partition != self.graph[b].partition)
        })
    }

    /// Summary counts for reporting.
    pub fn stats(&self) -> GraphStats {
        let isolated_attributes = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph[idx].partition == Partition::Attribute
                    && self.graph.neighbors(idx).next().is_none()
            })
            .count();

        GraphStats {
            students: self.student_index.len(),
            attributes: self.attribute_index.len(),
            edges: self.graph.edge_count(),
            isolated_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_and_edge_insertion_is_idempotent() {
        let mut graph = BipartiteGraph::new();
        graph.add_student("1");
        graph.add_student("1");
        graph.add_attribute("Age_Young");
        graph.add_edge("1", "Age_Young");
        graph.add_edge("1", "Age_Young");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_are_reported_student_first() {
        let mut graph = BipartiteGraph::new();
        graph.add_attribute("Gender_Male");
        graph.add_edge("2", "Gender_Male");

        assert_eq!(graph.edges(), vec![("2", "Gender_Male")]);
        assert!(graph.is_bipartite());
    }

    #[test]
    fn insertion_order_is_preserved_per_partition() {
        let mut graph = BipartiteGraph::new();
        graph.add_student("3");
        graph.add_student("1");
        graph.add_attribute("B");
        graph.add_attribute("A");

        assert_eq!(graph.student_ids(), vec!["3", "1"]);
        assert_eq!(graph.attribute_names(), vec!["B", "A"]);
    }

    #[test]
    fn stats_count_isolated_attributes() {
        let mut graph = BipartiteGraph::new();
        graph.add_attribute("Unused");
        graph.add_edge("1", "Used");

        let stats = graph.stats();
        assert_eq!(stats.students, 1);
        assert_eq!(stats.attributes, 2);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.isolated_attributes, 1);
    }

    #[test]
    fn degree_covers_both_partitions() {
        let mut graph = BipartiteGraph::new();
        graph.add_edge("1", "A");
        graph.add_edge("1", "B");
        graph.add_edge("2", "A");

        assert_eq!(graph.degree("1"), Some(2));
        assert_eq!(graph.degree("A"), Some(2));
        assert_eq!(graph.degree("missing"), None);
    }
}
