//! Term network: graph wrapper, construction, annotation, and filtering.

use ahash::AHashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

pub mod builder;
pub mod filter;
pub mod metrics;

pub use builder::GraphBuilder;
pub use filter::filter_network;
pub use metrics::annotate;

/// A vocabulary term with its structural annotations.
///
/// `community` is `None` until the graph passes through the metrics engine;
/// stored community ids are 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct TermNode {
    /// The term label.
    pub label: String,
    /// Number of documents containing the term (matrix diagonal).
    pub occurrences: u64,
    /// 1-based community id, set by annotation.
    pub community: Option<usize>,
    /// Centrality score in [0, 1], set by annotation.
    pub centrality: f64,
}

impl TermNode {
    /// Create an unannotated node for a term.
    pub fn new<S: Into<String>>(label: S) -> Self {
        TermNode {
            label: label.into(),
            occurrences: 0,
            community: None,
            centrality: 0.0,
        }
    }
}

/// An undirected weighted term co-occurrence network.
///
/// Wraps a `petgraph` undirected graph and keeps a label → node index map
/// for term lookups. Edge weights are co-occurrence counts; self-loops are
/// never stored.
#[derive(Clone, Debug, Default)]
pub struct TermGraph {
    graph: UnGraph<TermNode, f64>,
    index: AHashMap<String, NodeIndex>,
}

impl TermGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        TermGraph {
            graph: UnGraph::default(),
            index: AHashMap::new(),
        }
    }

    /// Add a term node, returning its index.
    ///
    /// If the label is already present, the existing index is returned and
    /// the node is left unchanged.
    pub fn add_term(&mut self, node: TermNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.label) {
            return idx;
        }
        let label = node.label.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(label, idx);
        idx
    }

    /// Add an undirected edge with the given weight.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: f64) {
        self.graph.add_edge(a, b, weight);
    }

    /// Look up a node index by term label.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    /// Whether a term is present in the graph.
    pub fn contains_term(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Node payload by index.
    pub fn node(&self, idx: NodeIndex) -> Option<&TermNode> {
        self.graph.node_weight(idx)
    }

    /// Mutable node payload by index.
    pub fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut TermNode> {
        self.graph.node_weight_mut(idx)
    }

    /// All node indices.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All nodes with their indices.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &TermNode)> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).map(|node| (idx, node)))
    }

    /// All edges as `(endpoint, endpoint, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), *edge.weight()))
    }

    /// Number of edges incident to a node.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Access the underlying petgraph graph (for graph algorithms).
    pub fn inner(&self) -> &UnGraph<TermNode, f64> {
        &self.graph
    }
}
