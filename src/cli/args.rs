//! Command line argument parsing for the termnet CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// termnet - term co-occurrence network analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "termnet")]
#[command(about = "Term co-occurrence network analysis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermnetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TermnetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a corpus and export the filtered network
    Analyze(AnalyzeArgs),

    /// Analyze a corpus, apply corrected labels, and render
    Render(RenderArgs),

    /// Show corpus and network statistics
    Stats(StatsArgs),
}

/// Options shared by every pipeline run
#[derive(Parser, Debug, Clone)]
pub struct PipelineArgs {
    /// Path to the ###-separated corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum node count of the filtered network
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Minimum edge weight kept by the filter
    #[arg(long)]
    pub min_weight: Option<f64>,

    /// Additional stopword (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Write correction-candidate labels to this CSV file
    #[arg(long, value_name = "LABELS_CSV")]
    pub labels_out: Option<PathBuf>,

    /// Write the rendered network to this DOT file
    #[arg(long, value_name = "DOT_FILE")]
    pub dot_out: Option<PathBuf>,

    /// Title of the rendered network
    #[arg(long, default_value = "")]
    pub title: String,
}

/// Arguments for the render command
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Corrected label file produced by `analyze --labels-out` and edited
    #[arg(short, long, value_name = "LABELS_CSV")]
    pub labels: PathBuf,

    /// Write the rendered network to this DOT file
    #[arg(long, value_name = "DOT_FILE", default_value = "network.dot")]
    pub dot_out: PathBuf,

    /// Title of the rendered network
    #[arg(long, default_value = "")]
    pub title: String,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}
