//! Graph summary — human-readable console output plus a JSON form.

use serde::{Deserialize, Serialize};

use crate::bipartite::BipartiteGraph;

/// How many student identifiers the summary samples.
const STUDENT_SAMPLE: usize = 5;

/// Per-attribute degree entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDegree {
    pub name: String,
    pub degree: usize,
}

/// Snapshot of a finished graph for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub is_bipartite: bool,
    pub student_count: usize,
    /// First few student identifiers, in input order.
    pub sample_students: Vec<String>,
    /// Full attribute list with edge degrees, in catalog order.
    pub attributes: Vec<AttributeDegree>,
}

impl GraphSummary {
    /// Collect summary data from a built graph.
    pub fn from_graph(graph: &BipartiteGraph) -> Self {
        let students = graph.student_ids();
        let attributes = graph
            .attribute_names()
            .iter()
            .map(|&name| AttributeDegree {
                name: name.to_string(),
                degree: graph.degree(name).unwrap_or(0),
            })
            .collect();

        Self {
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
            is_bipartite: graph.is_bipartite(),
            student_count: students.len(),
            sample_students: students
                .iter()
                .take(STUDENT_SAMPLE)
                .map(|s| s.to_string())
                .collect(),
            attributes,
        }
    }

    /// Render the human-readable terminal report.
    pub fn render_console(&self) -> String {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║       Cohort Bipartite Graph Summary     ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        output.push_str(&format!("Total nodes:  {}\n", self.total_nodes));
        output.push_str(&format!("Total edges:  {}\n", self.total_edges));
        output.push_str(&format!("Is bipartite: {}\n", self.is_bipartite));
        output.push_str(&format!(
            "Students:     {} (sample: {})\n",
            self.student_count,
            self.sample_students.join(", ")
        ));

        output.push_str(&format!("Attributes ({}):\n", self.attributes.len()));
        for attr in &self.attributes {
            output.push_str(&format!("  {} — degree {}\n", attr.name, attr.degree));
        }

        output
    }

    /// Machine-readable JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::build;
    use crate::catalog::default_catalog;
    use cohort_core::record::{Record, Table};
    use rustc_hash::FxHashMap;

    fn small_table() -> Table {
        let rows = [("1", "Female", "20"), ("2", "Male", "30")];
        let records = rows
            .iter()
            .map(|(id, gender, age)| {
                let mut fields = FxHashMap::default();
                fields.insert("Gender".to_string(), gender.to_string());
                fields.insert("Age".to_string(), age.to_string());
                Record::new(*id, fields)
            })
            .collect();
        Table::new(
            vec!["id".to_string(), "Gender".to_string(), "Age".to_string()],
            records,
        )
    }

    #[test]
    fn summary_reflects_graph_contents() {
        let graph = build(&small_table(), &default_catalog().unwrap());
        let summary = GraphSummary::from_graph(&graph);

        assert_eq!(summary.student_count, 2);
        assert_eq!(summary.total_nodes, 2 + 13);
        assert_eq!(summary.total_edges, 4);
        assert!(summary.is_bipartite);
        assert_eq!(summary.sample_students, vec!["1", "2"]);
        assert_eq!(summary.attributes.len(), 13);
    }

    #[test]
    fn console_report_names_every_attribute() {
        let graph = build(&small_table(), &default_catalog().unwrap());
        let report = GraphSummary::from_graph(&graph).render_console();

        assert!(report.contains("Total nodes:  15"));
        assert!(report.contains("Is bipartite: true"));
        assert!(report.contains("Gender_Female — degree 1"));
        assert!(report.contains("HasGoodSleep — degree 0"));
    }

    #[test]
    fn json_round_trips() {
        let graph = build(&small_table(), &default_catalog().unwrap());
        let summary = GraphSummary::from_graph(&graph);
        let json = summary.to_json().unwrap();
        let back: GraphSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_edges, summary.total_edges);
    }
}
