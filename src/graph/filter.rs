//! Network filtering: top-N ranking, weight threshold, isolate removal.

use std::collections::HashSet;

use log::debug;
use petgraph::graph::NodeIndex;

use crate::graph::TermGraph;

/// Bound the annotated graph to a presentable sub-network.
///
/// In order:
/// 1. If the graph has at most `top_n` nodes, keep all of them; otherwise
///    rank nodes by descending centrality (ties broken by label order, so
///    results are reproducible) and keep the top `top_n`.
/// 2. Induce the subgraph over the kept nodes, carrying all node attributes
///    unchanged.
/// 3. Keep only induced edges whose weight is at least `min_weight`.
/// 4. Drop every node left without edges.
///
/// The result is a new, independently owned graph; the input is never
/// mutated. An empty input, or parameters that prune everything, yield a
/// valid empty network. The operation is idempotent for fixed parameters.
pub fn filter_network(graph: &TermGraph, top_n: usize, min_weight: f64) -> TermGraph {
    let kept: HashSet<NodeIndex> = if graph.node_count() <= top_n {
        graph.node_indices().collect()
    } else {
        let mut ranked: Vec<(NodeIndex, f64, &str)> = graph
            .nodes()
            .map(|(idx, node)| (idx, node.centrality, node.label.as_str()))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.2.cmp(b.2))
        });
        ranked.into_iter().take(top_n).map(|(idx, _, _)| idx).collect()
    };

    // Induced edges surviving the weight threshold.
    let retained_edges: Vec<(NodeIndex, NodeIndex, f64)> = graph
        .edges()
        .filter(|(u, v, weight)| kept.contains(u) && kept.contains(v) && *weight >= min_weight)
        .collect();

    // Kept nodes that still touch an edge; the rest are isolates and drop.
    let connected: HashSet<NodeIndex> = retained_edges
        .iter()
        .flat_map(|&(u, v, _)| [u, v])
        .collect();

    let mut filtered = TermGraph::new();
    for idx in graph.node_indices() {
        if connected.contains(&idx) {
            if let Some(node) = graph.node(idx) {
                filtered.add_term(node.clone());
            }
        }
    }

    for (u, v, weight) in retained_edges {
        let (Some(node_u), Some(node_v)) = (graph.node(u), graph.node(v)) else {
            continue;
        };
        let (Some(new_u), Some(new_v)) = (
            filtered.node_index(&node_u.label),
            filtered.node_index(&node_v.label),
        ) else {
            continue;
        };
        filtered.add_edge(new_u, new_v, weight);
    }

    debug!(
        "filtered network: {} nodes, {} edges (top_n={top_n}, min_weight={min_weight})",
        filtered.node_count(),
        filtered.edge_count()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TermNode;

    fn annotated_node(label: &str, centrality: f64) -> TermNode {
        let mut node = TermNode::new(label);
        node.centrality = centrality;
        node.community = Some(1);
        node.occurrences = 1;
        node
    }

    /// a--b heavy, b--c light, d isolated; centrality a > b > c > d.
    fn sample_graph() -> TermGraph {
        let mut graph = TermGraph::new();
        let a = graph.add_term(annotated_node("a", 0.4));
        let b = graph.add_term(annotated_node("b", 0.3));
        let c = graph.add_term(annotated_node("c", 0.2));
        graph.add_term(annotated_node("d", 0.1));
        graph.add_edge(a, b, 3.0);
        graph.add_edge(b, c, 1.0);
        graph
    }

    #[test]
    fn test_top_n_bound() {
        let graph = sample_graph();
        let filtered = filter_network(&graph, 2, 0.0);

        assert!(filtered.node_count() <= 2);
        assert!(filtered.contains_term("a"));
        assert!(filtered.contains_term("b"));
    }

    #[test]
    fn test_weight_threshold_and_isolate_cascade() {
        let graph = sample_graph();
        // c's only edge is below the threshold, so c drops too
        let filtered = filter_network(&graph, 10, 2.0);

        assert_eq!(filtered.node_count(), 2);
        assert!(filtered.contains_term("a"));
        assert!(filtered.contains_term("b"));
        assert!(!filtered.contains_term("c"));
        assert!(!filtered.contains_term("d"));
    }

    #[test]
    fn test_no_isolated_nodes_survive() {
        let graph = sample_graph();
        let filtered = filter_network(&graph, 10, 0.0);

        for idx in filtered.node_indices() {
            assert!(filtered.degree(idx) >= 1);
        }
        assert!(!filtered.contains_term("d"));
    }

    #[test]
    fn test_attributes_carry_forward() {
        let graph = sample_graph();
        let filtered = filter_network(&graph, 10, 0.0);

        let a = filtered.node(filtered.node_index("a").unwrap()).unwrap();
        assert_eq!(a.centrality, 0.4);
        assert_eq!(a.community, Some(1));
        assert_eq!(a.occurrences, 1);
    }

    #[test]
    fn test_centrality_ties_break_by_label() {
        let mut graph = TermGraph::new();
        let z = graph.add_term(annotated_node("z", 0.5));
        let m = graph.add_term(annotated_node("m", 0.5));
        let a = graph.add_term(annotated_node("a", 0.5));
        graph.add_edge(z, m, 1.0);
        graph.add_edge(m, a, 1.0);
        graph.add_edge(a, z, 1.0);

        let filtered = filter_network(&graph, 2, 0.0);

        // "a" and "m" win the tie over "z"
        assert!(filtered.contains_term("a"));
        assert!(filtered.contains_term("m"));
        assert!(!filtered.contains_term("z"));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let graph = sample_graph();
        let once = filter_network(&graph, 2, 1.0);
        let twice = filter_network(&once, 2, 1.0);

        assert_eq!(once.node_count(), twice.node_count());
        assert_eq!(once.edge_count(), twice.edge_count());
        for (idx, node) in once.nodes() {
            let again = twice.node(twice.node_index(&node.label).unwrap()).unwrap();
            assert_eq!(node, again);
            assert_eq!(once.degree(idx), twice.degree(twice.node_index(&node.label).unwrap()));
        }
    }

    #[test]
    fn test_min_weight_above_all_edges_yields_empty_network() {
        let graph = sample_graph();
        let filtered = filter_network(&graph, 10, 100.0);

        assert!(filtered.is_empty());
        assert_eq!(filtered.edge_count(), 0);
    }

    #[test]
    fn test_empty_input_graph() {
        let graph = TermGraph::new();
        let filtered = filter_network(&graph, 5, 1.0);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_input_graph_is_untouched() {
        let graph = sample_graph();
        let before = (graph.node_count(), graph.edge_count());
        let _ = filter_network(&graph, 1, 5.0);

        assert_eq!((graph.node_count(), graph.edge_count()), before);
    }
}
