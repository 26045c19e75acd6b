//! End-to-end analysis pipeline.
//!
//! Wires the stages together: corpus reading, tokenization, co-occurrence
//! counting, graph construction, metric annotation, and network filtering.
//! Each stage produces a new artifact; nothing mutates upstream state. The
//! label-correction and rendering boundaries are exposed as explicit
//! pass-throughs so callers control the human-in-the-loop step.
//!
//! # Examples
//!
//! ```no_run
//! use termnet::config::NetworkConfig;
//! use termnet::pipeline::NetworkPipeline;
//! use std::path::Path;
//!
//! let pipeline = NetworkPipeline::new(NetworkConfig::default()).unwrap();
//! let network = pipeline.analyze_file(Path::new("corpus.txt")).unwrap();
//! println!("{} terms survived filtering", network.node_count());
//! ```

use std::path::Path;

use log::info;

use crate::algorithms::{
    CentralityMeasure, CommunityDetector, LabelPropagation, PageRank,
};
use crate::analysis::analyzer::{Analyzer, default_analyzer};
use crate::config::NetworkConfig;
use crate::corpus::{CorpusReader, Document, tokenize_documents};
use crate::error::Result;
use crate::graph::{GraphBuilder, TermGraph, annotate, filter_network};
use crate::labels::{LabelMap, export_labels};
use crate::matrix::CooccurrenceMatrix;
use crate::render::Renderer;

/// The configured analysis pipeline.
pub struct NetworkPipeline {
    config: NetworkConfig,
    analyzer: Box<dyn Analyzer>,
    detector: Box<dyn CommunityDetector>,
    centrality: Box<dyn CentralityMeasure>,
}

impl NetworkPipeline {
    /// Create a pipeline with the default analyzer and primitives derived
    /// from the configuration.
    pub fn new(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = default_analyzer(config.custom_stopwords.clone(), &config.lemmas);
        let detector = LabelPropagation::with_max_sweeps(config.max_sweeps);
        let centrality = PageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations);

        Ok(NetworkPipeline {
            config,
            analyzer: Box::new(analyzer),
            detector: Box::new(detector),
            centrality: Box::new(centrality),
        })
    }

    /// Substitute the tokenization collaborator.
    pub fn with_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Substitute the community-detection primitive.
    pub fn with_detector(mut self, detector: Box<dyn CommunityDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Substitute the centrality primitive.
    pub fn with_centrality(mut self, centrality: Box<dyn CentralityMeasure>) -> Self {
        self.centrality = centrality;
        self
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Run the full pipeline over a `###`-separated corpus file.
    pub fn analyze_file(&self, path: &Path) -> Result<TermGraph> {
        let segments = CorpusReader::new(path).read_raw()?;
        info!("read {} document segments from {}", segments.len(), path.display());

        let documents = tokenize_documents(self.analyzer.as_ref(), &segments)?;
        self.analyze_documents(&documents)
    }

    /// Run the matrix → graph → metrics → filter stages over tokenized
    /// documents.
    pub fn analyze_documents(&self, documents: &[Document]) -> Result<TermGraph> {
        let matrix = CooccurrenceMatrix::from_documents(documents);
        info!(
            "co-occurrence matrix over {} terms from {} documents",
            matrix.len(),
            documents.len()
        );

        let graph = GraphBuilder::from_matrix(&matrix);
        info!("term graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

        let graph = annotate(
            graph,
            &matrix,
            self.detector.as_ref(),
            self.centrality.as_ref(),
        )?;

        let filtered = filter_network(&graph, self.config.top_n, self.config.min_weight);
        info!(
            "filtered network: {} nodes, {} edges",
            filtered.node_count(),
            filtered.edge_count()
        );

        Ok(filtered)
    }

    /// Export the network's labels as a correction-candidate CSV.
    pub fn export_labels(&self, graph: &TermGraph, path: &Path) -> Result<()> {
        export_labels(graph, path)
    }

    /// Reimport a corrected label file and relabel the network.
    pub fn apply_labels(&self, graph: &TermGraph, path: &Path) -> Result<TermGraph> {
        let map = LabelMap::from_csv(path)?;
        let relabeled = map.apply(graph)?;
        info!("relabeled {} nodes", relabeled.node_count());
        Ok(relabeled)
    }

    /// Render the network through the given presentation backend.
    pub fn render(
        &self,
        renderer: &dyn Renderer,
        graph: &TermGraph,
        title: &str,
        path: &Path,
    ) -> Result<()> {
        renderer.render(graph, title, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: usize, tokens: &[&str]) -> Document {
        Document::new(id, tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_analyze_documents_respects_bounds() {
        let docs = vec![
            doc(0, &["rede", "escola", "ensino"]),
            doc(1, &["rede", "escola"]),
            doc(2, &["rede", "pesquisa", "ensino"]),
        ];
        let config = NetworkConfig {
            top_n: 3,
            min_weight: 1.0,
            ..Default::default()
        };
        let pipeline = NetworkPipeline::new(config).unwrap();

        let network = pipeline.analyze_documents(&docs).unwrap();

        assert!(network.node_count() <= 3);
        for idx in network.node_indices() {
            assert!(network.degree(idx) >= 1);
        }
        for (_, _, weight) in network.edges() {
            assert!(weight >= 1.0);
        }
    }

    #[test]
    fn test_empty_document_set() {
        let pipeline = NetworkPipeline::new(NetworkConfig::default()).unwrap();
        let network = pipeline.analyze_documents(&[]).unwrap();

        assert!(network.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = NetworkConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(NetworkPipeline::new(config).is_err());
    }
}
