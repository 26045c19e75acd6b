//! Weighted label propagation community detection.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::algorithms::CommunityDetector;
use crate::error::Result;
use crate::graph::TermGraph;

/// Asynchronous weighted label propagation.
///
/// Each node starts with its own label. In each sweep, nodes are visited in
/// a deterministically shuffled order and adopt the label with the highest
/// incident edge weight among their neighbors. The process converges when a
/// sweep changes no label, or stops at the sweep cap. Final labels are
/// renumbered densely from 0 in node-index order, so output ids are stable
/// for a given graph.
///
/// The shuffle uses a fixed LCG keyed on the sweep number, keeping runs
/// reproducible without a random-number dependency.
#[derive(Clone, Debug)]
pub struct LabelPropagation {
    max_sweeps: usize,
}

impl LabelPropagation {
    /// Create a detector with the default sweep cap.
    pub fn new() -> Self {
        LabelPropagation { max_sweeps: 20 }
    }

    /// Create a detector with a custom sweep cap.
    pub fn with_max_sweeps(max_sweeps: usize) -> Self {
        LabelPropagation { max_sweeps }
    }

    /// Deterministic Fisher-Yates shuffle keyed on the sweep number.
    fn shuffled_order(len: usize, sweep: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        let mut seed: u64 = (sweep as u64)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        for i in (1..order.len()).rev() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = ((seed >> 33) as usize) % (i + 1);
            order.swap(i, j);
        }
        order
    }
}

impl Default for LabelPropagation {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetector for LabelPropagation {
    fn partition(&self, graph: &TermGraph) -> Result<HashMap<NodeIndex, usize>> {
        let inner = graph.inner();
        let node_list: Vec<NodeIndex> = inner.node_indices().collect();
        if node_list.is_empty() {
            return Ok(HashMap::new());
        }

        // Each node starts in its own community.
        let mut labels: HashMap<NodeIndex, usize> =
            node_list.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        for sweep in 0..self.max_sweeps {
            let mut changed = false;

            for &pos in &Self::shuffled_order(node_list.len(), sweep) {
                let node = node_list[pos];

                let mut label_weights: HashMap<usize, f64> = HashMap::new();
                for edge in inner.edges(node) {
                    let neighbor = if edge.source() == node {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    if let Some(&label) = labels.get(&neighbor) {
                        *label_weights.entry(label).or_insert(0.0) += *edge.weight();
                    }
                }

                if label_weights.is_empty() {
                    continue; // isolated node keeps its own label
                }

                // Highest total weight wins; ties go to the smallest label
                // id so sweeps stay deterministic.
                let best = label_weights
                    .iter()
                    .max_by(|a, b| {
                        a.1.partial_cmp(b.1)
                            .unwrap_or(std::cmp::Ordering::Equal)
                            .then_with(|| b.0.cmp(a.0))
                    })
                    .map(|(&label, _)| label);

                if let Some(best_label) = best {
                    let current = labels[&node];
                    if best_label != current {
                        labels.insert(node, best_label);
                        changed = true;
                    }
                }
            }

            if !changed {
                break;
            }
        }

        // Renumber communities densely, 0-based, in node-index order.
        let mut renumber: HashMap<usize, usize> = HashMap::new();
        let mut result = HashMap::with_capacity(node_list.len());
        for &node in &node_list {
            let raw = labels[&node];
            let next = renumber.len();
            let dense = *renumber.entry(raw).or_insert(next);
            result.insert(node, dense);
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "label_propagation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TermNode;

    fn triangle(graph: &mut TermGraph, labels: [&str; 3], weight: f64) -> [NodeIndex; 3] {
        let a = graph.add_term(TermNode::new(labels[0]));
        let b = graph.add_term(TermNode::new(labels[1]));
        let c = graph.add_term(TermNode::new(labels[2]));
        graph.add_edge(a, b, weight);
        graph.add_edge(b, c, weight);
        graph.add_edge(a, c, weight);
        [a, b, c]
    }

    #[test]
    fn test_every_node_is_assigned() {
        let mut graph = TermGraph::new();
        triangle(&mut graph, ["a", "b", "c"], 1.0);
        graph.add_term(TermNode::new("isolado"));

        let detector = LabelPropagation::new();
        let partition = detector.partition(&graph).unwrap();

        assert_eq!(partition.len(), 4);
    }

    #[test]
    fn test_disconnected_triangles_get_distinct_communities() {
        let mut graph = TermGraph::new();
        let first = triangle(&mut graph, ["a", "b", "c"], 2.0);
        let second = triangle(&mut graph, ["x", "y", "z"], 2.0);

        let partition = LabelPropagation::new().partition(&graph).unwrap();

        let c1 = partition[&first[0]];
        assert!(first.iter().all(|n| partition[n] == c1));

        let c2 = partition[&second[0]];
        assert!(second.iter().all(|n| partition[n] == c2));

        assert_ne!(c1, c2);
    }

    #[test]
    fn test_labels_are_dense_from_zero() {
        let mut graph = TermGraph::new();
        triangle(&mut graph, ["a", "b", "c"], 1.0);
        triangle(&mut graph, ["x", "y", "z"], 1.0);

        let partition = LabelPropagation::new().partition(&graph).unwrap();
        let mut ids: Vec<usize> = partition.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_empty_graph_is_accepted() {
        let graph = TermGraph::new();
        let partition = LabelPropagation::new().partition(&graph).unwrap();
        assert!(partition.is_empty());
    }

    #[test]
    fn test_edgeless_graph_is_accepted() {
        let mut graph = TermGraph::new();
        graph.add_term(TermNode::new("a"));
        graph.add_term(TermNode::new("b"));

        let partition = LabelPropagation::new().partition(&graph).unwrap();
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn test_partition_is_deterministic() {
        let mut graph = TermGraph::new();
        triangle(&mut graph, ["a", "b", "c"], 1.0);
        triangle(&mut graph, ["x", "y", "z"], 1.0);

        let first = LabelPropagation::new().partition(&graph).unwrap();
        let second = LabelPropagation::new().partition(&graph).unwrap();

        assert_eq!(first, second);
    }
}
