//! Weighted PageRank centrality.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::algorithms::CentralityMeasure;
use crate::error::Result;
use crate::graph::TermGraph;

/// Weighted PageRank over the undirected term network.
///
/// Each node distributes its rank to neighbors proportionally to edge
/// weight. Nodes with no edges are treated as dangling and spread their
/// rank uniformly, which keeps the scores summing to 1; an entirely
/// edgeless graph therefore yields the uniform 1/n distribution. Iteration
/// stops when the L1 change drops below the tolerance or the iteration cap
/// is reached.
#[derive(Clone, Debug)]
pub struct PageRank {
    damping: f64,
    max_iterations: usize,
    tolerance: f64,
}

impl PageRank {
    /// Create a PageRank measure with the conventional parameters
    /// (damping 0.85, 100 iterations, tolerance 1e-6).
    pub fn new() -> Self {
        PageRank {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the L1 convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for PageRank {
    fn default() -> Self {
        Self::new()
    }
}

impl CentralityMeasure for PageRank {
    fn scores(&self, graph: &TermGraph) -> Result<HashMap<NodeIndex, f64>> {
        let inner = graph.inner();
        let node_list: Vec<NodeIndex> = inner.node_indices().collect();
        let n = node_list.len();
        if n == 0 {
            return Ok(HashMap::new());
        }

        // Position of each node in the rank vectors.
        let position: HashMap<NodeIndex, usize> =
            node_list.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();

        // Weighted degree per node; zero marks a dangling node.
        let mut strength = vec![0.0f64; n];
        for edge in inner.edge_references() {
            let w = *edge.weight();
            strength[position[&edge.source()]] += w;
            strength[position[&edge.target()]] += w;
        }

        let d = self.damping;
        let uniform = 1.0 / n as f64;
        let mut ranks = vec![uniform; n];

        for _ in 0..self.max_iterations {
            let dangling: f64 = (0..n)
                .filter(|&i| strength[i] == 0.0)
                .map(|i| ranks[i])
                .sum();

            let base = (1.0 - d) * uniform + d * dangling * uniform;
            let mut next = vec![base; n];

            for edge in inner.edge_references() {
                let u = position[&edge.source()];
                let v = position[&edge.target()];
                let w = *edge.weight();
                next[v] += d * ranks[u] * w / strength[u];
                next[u] += d * ranks[v] * w / strength[v];
            }

            let l1: f64 = ranks
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            ranks = next;
            if l1 < self.tolerance {
                break;
            }
        }

        Ok(node_list
            .iter()
            .map(|&idx| (idx, ranks[position[&idx]]))
            .collect())
    }

    fn name(&self) -> &'static str {
        "pagerank"
    }
}
