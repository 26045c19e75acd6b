//! Graph-analysis primitives used by the metrics engine.
//!
//! Community detection and centrality are consumed as black-box primitives
//! behind small trait seams, so alternative algorithms can be substituted
//! without touching the pipeline. The bundled defaults are
//! [`LabelPropagation`] and [`PageRank`].

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use crate::error::Result;
use crate::graph::TermGraph;

/// Trait for community-detection primitives.
pub trait CommunityDetector: Send + Sync {
    /// Partition the graph, mapping every node to a 0-based community id.
    ///
    /// Implementations must accept graphs with zero edges; if one cannot,
    /// the metrics engine tolerates the failure and falls back to a single
    /// community.
    fn partition(&self, graph: &TermGraph) -> Result<HashMap<NodeIndex, usize>>;

    /// Get the name of this detector.
    fn name(&self) -> &'static str;
}

/// Trait for centrality primitives.
pub trait CentralityMeasure: Send + Sync {
    /// Score every node; scores are stored on the graph verbatim.
    fn scores(&self, graph: &TermGraph) -> Result<HashMap<NodeIndex, f64>>;

    /// Get the name of this measure.
    fn name(&self) -> &'static str;
}

pub mod centrality;
pub mod community;

pub use centrality::PageRank;
pub use community::LabelPropagation;
