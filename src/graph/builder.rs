//! Graph construction from a co-occurrence matrix.

use petgraph::graph::NodeIndex;

use crate::graph::{TermGraph, TermNode};
use crate::matrix::CooccurrenceMatrix;

/// Builds a [`TermGraph`] from a [`CooccurrenceMatrix`].
#[derive(Debug)]
pub struct GraphBuilder;

impl GraphBuilder {
    /// Derive the term network from the matrix.
    ///
    /// Every vocabulary term becomes a node, including terms with no
    /// co-occurrences (isolated at this stage; filtering happens later).
    /// An edge is created between two distinct terms iff their off-diagonal
    /// cell is strictly positive, weighted by that cell. The diagonal never
    /// becomes an edge; it is applied as node metadata during annotation.
    /// Nodes are inserted in vocabulary order, so node indices are
    /// reproducible across runs.
    pub fn from_matrix(matrix: &CooccurrenceMatrix) -> TermGraph {
        let mut graph = TermGraph::new();
        let n = matrix.len();

        let indices: Vec<NodeIndex> = matrix
            .vocabulary()
            .terms()
            .iter()
            .map(|term| graph.add_term(TermNode::new(term.clone())))
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = matrix.count(i, j);
                if weight > 0 {
                    graph.add_edge(indices[i], indices[j], weight as f64);
                }
            }
        }

        graph
    }
}
