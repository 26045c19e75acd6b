//! Command implementations for the termnet CLI.

use crate::analysis::analyzer::default_analyzer;
use crate::cli::args::*;
use crate::config::NetworkConfig;
use crate::corpus::{CorpusReader, tokenize_documents};
use crate::error::Result;
use crate::graph::GraphBuilder;
use crate::matrix::CooccurrenceMatrix;
use crate::pipeline::NetworkPipeline;
use crate::render::DotRenderer;

/// Execute a CLI command.
pub fn execute_command(args: TermnetArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Render(render_args) => render(render_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Resolve the effective configuration: file settings overridden by flags.
fn resolve_config(args: &PipelineArgs) -> Result<NetworkConfig> {
    let mut config = match &args.config {
        Some(path) => NetworkConfig::from_file(path)?,
        None => NetworkConfig::default(),
    };

    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    if let Some(min_weight) = args.min_weight {
        config.min_weight = min_weight;
    }
    config
        .custom_stopwords
        .extend(args.stopwords.iter().cloned());

    config.validate()?;
    Ok(config)
}

/// Analyze a corpus; optionally export labels and render.
fn analyze(args: AnalyzeArgs, cli_args: &TermnetArgs) -> Result<()> {
    let config = resolve_config(&args.pipeline)?;
    let pipeline = NetworkPipeline::new(config)?;

    let network = pipeline.analyze_file(&args.pipeline.corpus)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Filtered network: {} nodes, {} edges",
            network.node_count(),
            network.edge_count()
        );
    }

    if let Some(labels_out) = &args.labels_out {
        pipeline.export_labels(&network, labels_out)?;
        if cli_args.verbosity() > 0 {
            println!("Labels written to: {}", labels_out.display());
            println!("Edit the corrected_label column, then run `termnet render`.");
        }
    }

    if let Some(dot_out) = &args.dot_out {
        pipeline.render(&DotRenderer::new(), &network, &args.title, dot_out)?;
        if cli_args.verbosity() > 0 {
            println!("Rendering written to: {}", dot_out.display());
        }
    }

    Ok(())
}

/// Re-run the pipeline, apply corrected labels, and render.
fn render(args: RenderArgs, cli_args: &TermnetArgs) -> Result<()> {
    let config = resolve_config(&args.pipeline)?;
    let pipeline = NetworkPipeline::new(config)?;

    let network = pipeline.analyze_file(&args.pipeline.corpus)?;
    let relabeled = pipeline.apply_labels(&network, &args.labels)?;
    pipeline.render(&DotRenderer::new(), &relabeled, &args.title, &args.dot_out)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Rendered {} nodes, {} edges to: {}",
            relabeled.node_count(),
            relabeled.edge_count(),
            args.dot_out.display()
        );
    }

    Ok(())
}

/// Print corpus and network statistics.
fn stats(args: StatsArgs, cli_args: &TermnetArgs) -> Result<()> {
    let config = resolve_config(&args.pipeline)?;

    let segments = CorpusReader::new(&args.pipeline.corpus).read_raw()?;
    let analyzer = default_analyzer(config.custom_stopwords.clone(), &config.lemmas);
    let documents = tokenize_documents(&analyzer, &segments)?;
    let matrix = CooccurrenceMatrix::from_documents(&documents);
    let graph = GraphBuilder::from_matrix(&matrix);

    println!("Documents:  {}", documents.len());
    println!("Vocabulary: {}", matrix.len());
    println!("Nodes:      {}", graph.node_count());
    println!("Edges:      {}", graph.edge_count());

    if cli_args.verbosity() > 1 {
        let mut terms: Vec<_> = matrix
            .vocabulary()
            .terms()
            .iter()
            .filter_map(|t| matrix.document_frequency(t).map(|df| (t.clone(), df)))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        println!("Top terms by document frequency:");
        for (term, df) in terms.iter().take(10) {
            println!("  {term}: {df}");
        }
    }

    Ok(())
}
