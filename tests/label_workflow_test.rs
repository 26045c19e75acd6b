//! Integration tests for the two-phase label-correction workflow.

use std::fs;

use tempfile::TempDir;

use termnet::config::NetworkConfig;
use termnet::pipeline::NetworkPipeline;
use termnet::prelude::*;

const CORPUS: &str = "\
Educação e ciência caminham juntas.
###
Ciência aplicada, educação continuada.
###
Educação comunitária.
";

#[test]
fn test_export_edit_reimport_render() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    let labels_path = dir.path().join("labels.csv");
    let dot_path = dir.path().join("network.dot");
    fs::write(&corpus_path, CORPUS).unwrap();

    let pipeline = NetworkPipeline::new(NetworkConfig::default())?;
    let network = pipeline.analyze_file(&corpus_path)?;
    assert!(network.contains_term("educacao"));
    assert!(network.contains_term("ciencia"));

    // Phase 1: export candidates
    pipeline.export_labels(&network, &labels_path)?;
    let exported = fs::read_to_string(&labels_path).unwrap();
    assert!(exported.starts_with("original_label,corrected_label"));
    assert!(exported.contains("educacao,educacao"));

    // Human edit: restore the accented spellings
    let edited = exported
        .replace("educacao,educacao", "educacao,educação")
        .replace("ciencia,ciencia", "ciencia,ciência");
    fs::write(&labels_path, edited).unwrap();

    // Phase 2: reimport and relabel into a new graph
    let relabeled = pipeline.apply_labels(&network, &labels_path)?;
    assert!(relabeled.contains_term("educação"));
    assert!(relabeled.contains_term("ciência"));
    assert!(!relabeled.contains_term("educacao"));
    assert_eq!(relabeled.node_count(), network.node_count());
    assert_eq!(relabeled.edge_count(), network.edge_count());

    // The source network is untouched by relabeling
    assert!(network.contains_term("educacao"));

    // Render the corrected network
    pipeline.render(&DotRenderer::new(), &relabeled, "Rede de Termos", &dot_path)?;
    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("educação"));
    assert!(dot.contains("Rede de Termos"));

    Ok(())
}

#[test]
fn test_identity_edit_preserves_everything() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    let labels_path = dir.path().join("labels.csv");
    fs::write(&corpus_path, CORPUS).unwrap();

    let pipeline = NetworkPipeline::new(NetworkConfig::default())?;
    let network = pipeline.analyze_file(&corpus_path)?;

    // Export and reimport without edits
    pipeline.export_labels(&network, &labels_path)?;
    let relabeled = pipeline.apply_labels(&network, &labels_path)?;

    assert_eq!(relabeled.node_count(), network.node_count());
    assert_eq!(relabeled.edge_count(), network.edge_count());
    for (_, node) in network.nodes() {
        let twin = relabeled
            .node(relabeled.node_index(&node.label).expect("label survives"))
            .unwrap();
        assert_eq!(twin, node);
    }

    Ok(())
}

#[test]
fn test_missing_label_file_aborts_relabeling() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    fs::write(&corpus_path, CORPUS).unwrap();

    let pipeline = NetworkPipeline::new(NetworkConfig::default())?;
    let network = pipeline.analyze_file(&corpus_path)?;

    let result = pipeline.apply_labels(&network, &dir.path().join("never_written.csv"));
    assert!(matches!(result, Err(TermnetError::Labels(_))));

    Ok(())
}
