//! Label-correction boundary: export candidate labels, reimport corrections,
//! relabel.
//!
//! Normalization strips diacritics before counting, so the filtered network
//! carries bare labels like "educacao". The correction workflow is two
//! explicit phases with a human edit in between, never a blocking prompt:
//!
//! 1. [`export_labels`] writes a two-column CSV where both columns start as
//!    the current label.
//! 2. A human edits the `corrected_label` column.
//! 3. [`LabelMap::from_csv`] reads the file back and
//!    [`LabelMap::apply`] produces a new relabeled graph.
//!
//! The mapping is total: labels without a row fall back to themselves.

use std::path::Path;

use ahash::AHashMap;
use csv::{ReaderBuilder, Writer};
use log::info;

use crate::error::{Result, TermnetError};
use crate::graph::TermGraph;

/// Header of the exported original-label column.
pub const ORIGINAL_HEADER: &str = "original_label";
/// Header of the exported corrected-label column.
pub const CORRECTED_HEADER: &str = "corrected_label";

/// Write the graph's labels as a correction-candidate CSV.
///
/// One row per node in node-index order; both columns initially hold the
/// current label.
pub fn export_labels(graph: &TermGraph, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([ORIGINAL_HEADER, CORRECTED_HEADER])?;

    for (_, node) in graph.nodes() {
        writer.write_record([node.label.as_str(), node.label.as_str()])?;
    }

    writer.flush()?;
    info!("exported {} labels to {}", graph.node_count(), path.display());
    Ok(())
}

/// A total `original -> corrected` label mapping.
#[derive(Clone, Debug, Default)]
pub struct LabelMap {
    mapping: AHashMap<String, String>,
}

impl LabelMap {
    /// Create an empty (identity) mapping.
    pub fn new() -> Self {
        LabelMap {
            mapping: AHashMap::new(),
        }
    }

    /// Build a mapping from `(original, corrected)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mapping = pairs
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();
        LabelMap { mapping }
    }

    /// Read a corrected label file.
    ///
    /// A missing or unparsable file is fatal: the pipeline cannot proceed
    /// without a closed relabeling mapping. The error carries the
    /// underlying cause.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| {
                TermnetError::labels(format!(
                    "cannot read label file '{}': {e}",
                    path.display()
                ))
            })?;

        let mut mapping = AHashMap::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                TermnetError::labels(format!(
                    "malformed label file '{}': {e}",
                    path.display()
                ))
            })?;

            let (Some(original), Some(corrected)) = (record.get(0), record.get(1)) else {
                return Err(TermnetError::labels(format!(
                    "label file '{}': every row needs two columns",
                    path.display()
                )));
            };
            mapping.insert(original.to_string(), corrected.to_string());
        }

        Ok(LabelMap { mapping })
    }

    /// Resolve a label; unmapped labels resolve to themselves.
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.mapping.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Number of explicit mappings.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the mapping has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Apply the mapping, producing a new relabeled graph.
    ///
    /// The input graph is never mutated. Attributes and edges carry over
    /// unchanged. Two nodes resolving to the same corrected label is an
    /// error: this workflow corrects spellings, it does not merge terms.
    pub fn apply(&self, graph: &TermGraph) -> Result<TermGraph> {
        let mut relabeled = TermGraph::new();

        for (_, node) in graph.nodes() {
            let corrected = self.resolve(&node.label);
            if relabeled.contains_term(corrected) {
                return Err(TermnetError::labels(format!(
                    "corrected label '{corrected}' resolves more than one node"
                )));
            }
            let mut new_node = node.clone();
            new_node.label = corrected.to_string();
            relabeled.add_term(new_node);
        }

        for (u, v, weight) in graph.edges() {
            let (Some(node_u), Some(node_v)) = (graph.node(u), graph.node(v)) else {
                continue;
            };
            let (Some(new_u), Some(new_v)) = (
                relabeled.node_index(self.resolve(&node_u.label)),
                relabeled.node_index(self.resolve(&node_v.label)),
            ) else {
                continue;
            };
            relabeled.add_edge(new_u, new_v, weight);
        }

        Ok(relabeled)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::graph::TermNode;

    fn sample_graph() -> TermGraph {
        let mut graph = TermGraph::new();
        let mut educacao = TermNode::new("educacao");
        educacao.community = Some(1);
        educacao.centrality = 0.6;
        educacao.occurrences = 4;
        let a = graph.add_term(educacao);
        let b = graph.add_term(TermNode::new("ciencia"));
        graph.add_edge(a, b, 2.0);
        graph
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels.csv");
        let graph = sample_graph();

        export_labels(&graph, &path).unwrap();
        let map = LabelMap::from_csv(&path).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve("educacao"), "educacao");
    }

    #[test]
    fn test_identity_mapping_preserves_graph() {
        let graph = sample_graph();
        let relabeled = LabelMap::new().apply(&graph).unwrap();

        assert_eq!(relabeled.node_count(), graph.node_count());
        assert_eq!(relabeled.edge_count(), graph.edge_count());

        let node = relabeled
            .node(relabeled.node_index("educacao").unwrap())
            .unwrap();
        assert_eq!(node.community, Some(1));
        assert_eq!(node.centrality, 0.6);
        assert_eq!(node.occurrences, 4);
    }

    #[test]
    fn test_apply_relabels_and_keeps_edges() {
        let graph = sample_graph();
        let map = LabelMap::from_pairs([("educacao", "educação"), ("ciencia", "ciência")]);

        let relabeled = map.apply(&graph).unwrap();

        assert!(relabeled.contains_term("educação"));
        assert!(relabeled.contains_term("ciência"));
        assert!(!relabeled.contains_term("educacao"));

        let u = relabeled.node_index("educação").unwrap();
        let v = relabeled.node_index("ciência").unwrap();
        assert_eq!(relabeled.degree(u), 1);
        assert_eq!(relabeled.degree(v), 1);

        let (_, _, weight) = relabeled.edges().next().unwrap();
        assert_eq!(weight, 2.0);
    }

    #[test]
    fn test_unmapped_labels_default_to_themselves() {
        let graph = sample_graph();
        let map = LabelMap::from_pairs([("educacao", "educação")]);

        let relabeled = map.apply(&graph).unwrap();

        assert!(relabeled.contains_term("educação"));
        assert!(relabeled.contains_term("ciencia"));
    }

    #[test]
    fn test_colliding_corrections_are_rejected() {
        let graph = sample_graph();
        let map = LabelMap::from_pairs([("educacao", "termo"), ("ciencia", "termo")]);

        assert!(map.apply(&graph).is_err());
    }

    #[test]
    fn test_missing_label_file_is_fatal() {
        let err = LabelMap::from_csv(Path::new("/no/such/labels.csv")).unwrap_err();
        assert!(matches!(err, TermnetError::Labels(_)));
    }

    #[test]
    fn test_original_graph_is_untouched() {
        let graph = sample_graph();
        let map = LabelMap::from_pairs([("educacao", "educação")]);
        let _ = map.apply(&graph).unwrap();

        assert!(graph.contains_term("educacao"));
        assert!(!graph.contains_term("educação"));
    }
}
