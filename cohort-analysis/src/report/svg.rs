//! SVG exporter — two-column bipartite layout, students left, attributes right.

use std::fmt::Write as _;
use std::path::Path;

use rustc_hash::FxHashMap;

use cohort_core::errors::RenderError;

use crate::bipartite::BipartiteGraph;

/// SVG exporter with a fixed-width, height-scaled two-column layout.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    pub width: u32,
    /// Minimum canvas height; tall graphs grow beyond it.
    pub min_height: u32,
    pub node_radius: u32,
    /// Vertical space allotted per node.
    pub row_spacing: u32,
    pub margin: u32,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            width: 1000,
            min_height: 600,
            node_radius: 12,
            row_spacing: 34,
            margin: 60,
        }
    }
}

impl SvgExporter {
    /// Render the graph to an SVG document string.
    pub fn render(&self, graph: &BipartiteGraph) -> String {
        let students = graph.student_ids();
        let attributes = graph.attribute_names();

        let rows = students.len().max(attributes.len()).max(1);
        let height = self
            .min_height
            .max(2 * self.margin + (rows as u32) * self.row_spacing);

        let left_x = self.margin as f64 + 80.0;
        let right_x = (self.width - self.margin) as f64 - 180.0;

        let positions = {
            let mut map: FxHashMap<&str, (f64, f64)> = FxHashMap::default();
            for (i, &id) in students.iter().enumerate() {
                map.insert(id, (left_x, self.row_y(height, students.len(), i)));
            }
            for (i, &name) in attributes.iter().enumerate() {
                map.insert(name, (right_x, self.row_y(height, attributes.len(), i)));
            }
            map
        };

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            self.width, height, self.width, height
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">Bipartite Graph: Students and Attributes</text>",
            self.width / 2
        );

        // Edges below nodes.
        for (student, attribute) in graph.edges() {
            let (x1, y1) = positions[student];
            let (x2, y2) = positions[attribute];
            let _ = writeln!(
                svg,
                "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"gray\" stroke-width=\"1\"/>"
            );
        }

        for &id in &students {
            let (x, y) = positions[id];
            self.push_node(&mut svg, x, y, id, "lightblue", TextSide::Left);
        }
        for &name in &attributes {
            let (x, y) = positions[name];
            self.push_node(&mut svg, x, y, name, "lightgreen", TextSide::Right);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render and write the SVG to a file.
    pub fn write(&self, graph: &BipartiteGraph, path: &Path) -> Result<(), RenderError> {
        let svg = self.render(graph);
        std::fs::write(path, svg).map_err(|e| RenderError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn row_y(&self, height: u32, count: usize, index: usize) -> f64 {
        let usable = (height - 2 * self.margin) as f64;
        if count <= 1 {
            return self.margin as f64 + usable / 2.0;
        }
        self.margin as f64 + usable * (index as f64) / ((count - 1) as f64)
    }

    fn push_node(&self, svg: &mut String, x: f64, y: f64, label: &str, fill: &str, side: TextSide) {
        let _ = writeln!(
            svg,
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{}\" fill=\"{fill}\" stroke=\"black\" stroke-width=\"0.5\"/>",
            self.node_radius
        );
        let (text_x, anchor) = match side {
            TextSide::Left => (x - self.node_radius as f64 - 6.0, "end"),
            TextSide::Right => (x + self.node_radius as f64 + 6.0, "start"),
        };
        let _ = writeln!(
            svg,
            "  <text x=\"{text_x:.1}\" y=\"{:.1}\" text-anchor=\"{anchor}\" font-size=\"10\">{}</text>",
            y + 3.0,
            escape_xml(label)
        );
    }
}

/// Which side of the node the label sits on.
#[derive(Debug, Clone, Copy)]
enum TextSide {
    Left,
    Right,
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
