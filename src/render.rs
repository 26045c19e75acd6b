//! Rendering of the filtered, annotated network.
//!
//! The pipeline hands the presentation layer a finished graph plus a title
//! and output path. The bundled [`DotRenderer`] writes Graphviz DOT with the
//! styling signals the analysis produces: node color by community, node size
//! and font scaled by centrality, edge width scaled by co-occurrence weight.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::graph::TermGraph;

/// Trait for presentation backends consuming the final graph.
pub trait Renderer: Send + Sync {
    /// Render the graph under the given title to the output path.
    fn render(&self, graph: &TermGraph, title: &str, path: &Path) -> Result<()>;

    /// Get the name of this renderer.
    fn name(&self) -> &'static str;
}

/// Node fill palette, indexed by community id.
const PALETTE: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

/// A renderer that writes Graphviz DOT text.
#[derive(Clone, Debug, Default)]
pub struct DotRenderer;

impl DotRenderer {
    /// Create a new DOT renderer.
    pub fn new() -> Self {
        DotRenderer
    }

    /// Build the DOT document for the graph.
    pub fn to_dot(graph: &TermGraph, title: &str) -> String {
        let mut out = String::from("graph termnet {\n");
        if !title.is_empty() {
            out.push_str(&format!("  label=\"{}\";\n  labelloc=\"t\";\n", escape(title)));
        }
        out.push_str("  node [style=filled, fontname=\"Helvetica\"];\n");

        let centralities: Vec<f64> = graph.nodes().map(|(_, n)| n.centrality).collect();
        let min_c = centralities.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_c = centralities.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for (idx, node) in graph.nodes() {
            let norm = (node.centrality - min_c) / (max_c - min_c + 1e-9);
            let color = PALETTE[node.community.unwrap_or(1).saturating_sub(1) % PALETTE.len()];
            out.push_str(&format!(
                "  n{} [label=\"{}\\n({})\", fillcolor=\"{}\", width={:.2}, fontsize={:.1}];\n",
                idx.index(),
                escape(&node.label),
                node.occurrences,
                color,
                0.5 + norm * 2.0,
                10.0 + norm * 14.0,
            ));
        }

        let max_w = graph
            .edges()
            .map(|(_, _, w)| w)
            .fold(f64::NEG_INFINITY, f64::max);

        for (u, v, weight) in graph.edges() {
            out.push_str(&format!(
                "  n{} -- n{} [penwidth={:.2}, color=\"#999999\"];\n",
                u.index(),
                v.index(),
                1.0 + weight / max_w * 4.0,
            ));
        }

        out.push_str("}\n");
        out
    }
}

impl Renderer for DotRenderer {
    fn render(&self, graph: &TermGraph, title: &str, path: &Path) -> Result<()> {
        if graph.is_empty() {
            info!("network is empty, writing an empty rendering");
        }
        fs::write(path, Self::to_dot(graph, title))?;
        info!(
            "rendered {} nodes, {} edges to {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dot"
    }
}

/// Escape a string for a DOT double-quoted id.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
