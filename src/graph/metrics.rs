//! Node annotation: community, centrality, and occurrence metrics.

use log::{debug, warn};
use petgraph::graph::NodeIndex;

use crate::algorithms::{CentralityMeasure, CommunityDetector};
use crate::error::Result;
use crate::graph::TermGraph;
use crate::matrix::CooccurrenceMatrix;

/// Annotate every node with community id, centrality score, and occurrence
/// count.
///
/// Takes ownership of the graph and returns it annotated, so no reader can
/// observe a partially annotated graph. No nodes or edges are added or
/// removed.
///
/// Community detection failures are recovered locally: every node falls
/// back to a single community rather than leaving the graph unassigned.
/// The detector's 0-based ids are remapped to 1-based before storage.
/// Centrality scores are stored verbatim; the occurrence count is the
/// node's diagonal cell in the matrix, i.e. its document frequency.
pub fn annotate(
    mut graph: TermGraph,
    matrix: &CooccurrenceMatrix,
    detector: &dyn CommunityDetector,
    centrality: &dyn CentralityMeasure,
) -> Result<TermGraph> {
    let partition = match detector.partition(&graph) {
        Ok(partition) => partition,
        Err(e) => {
            warn!(
                "community detection ({}) failed, assigning a single community: {e}",
                detector.name()
            );
            graph.node_indices().map(|idx| (idx, 0)).collect()
        }
    };

    let scores = centrality.scores(&graph)?;

    let indices: Vec<NodeIndex> = graph.node_indices().collect();
    for idx in indices {
        let community = partition.get(&idx).copied().unwrap_or(0) + 1;
        let score = scores.get(&idx).copied().unwrap_or(0.0);
        let occurrences = graph
            .node(idx)
            .and_then(|node| matrix.document_frequency(&node.label))
            .unwrap_or(0);

        if let Some(node) = graph.node_mut(idx) {
            node.community = Some(community);
            node.centrality = score;
            node.occurrences = occurrences;
        }
    }

    debug!(
        "annotated {} nodes with {} / {}",
        graph.node_count(),
        detector.name(),
        centrality.name()
    );

    Ok(graph)
}
