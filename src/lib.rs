//! # termnet
//!
//! A term co-occurrence network analysis library for Rust.
//!
//! ## Features
//!
//! - Configurable tokenization and normalization pipeline
//! - Document-presence co-occurrence counting
//! - Weighted term graphs over petgraph
//! - Community detection and centrality behind swappable trait seams
//! - Centrality-ranked network filtering with edge-weight pruning
//! - Two-phase label correction and Graphviz DOT rendering

pub mod algorithms;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod labels;
pub mod matrix;
pub mod pipeline;
pub mod render;

pub mod prelude {
    //! Convenient re-exports of the most used types.

    pub use crate::algorithms::{CentralityMeasure, CommunityDetector, LabelPropagation, PageRank};
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, default_analyzer};
    pub use crate::config::NetworkConfig;
    pub use crate::corpus::{CorpusReader, Document, tokenize_documents};
    pub use crate::error::{Result, TermnetError};
    pub use crate::graph::{GraphBuilder, TermGraph, TermNode, annotate, filter_network};
    pub use crate::labels::{LabelMap, export_labels};
    pub use crate::matrix::{CooccurrenceMatrix, Vocabulary};
    pub use crate::pipeline::NetworkPipeline;
    pub use crate::render::{DotRenderer, Renderer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
