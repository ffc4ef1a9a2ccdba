use clap::{Parser, Subcommand};
use grafos_core::models::Language;
use std::path::PathBuf;

/// Grafos - Urban street-network analysis client
#[derive(Parser, Debug)]
#[command(name = "grafos")]
#[command(about = "Urban street-network analysis client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file (defaults to ./grafos.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long, global = true, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Interface language (es or en)
    #[arg(long, global = true)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one analysis and print the rendered result
    Analyze(AnalyzeArgs),

    /// Warm up with the configured defaults, then prompt for new analyses
    Interactive,

    /// Check that the analysis service is reachable
    Health,

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// City or place name (e.g., "Lyon, France")
    #[arg(long)]
    pub city: Option<String>,

    /// Network type (walk, drive, bike)
    #[arg(long)]
    pub mode: Option<String>,

    /// Radius around the city center in kilometers
    #[arg(long)]
    pub radius_km: Option<f64>,

    /// Skip betweenness centrality
    #[arg(long)]
    pub no_centrality: bool,

    /// Compute closeness centrality
    #[arg(long)]
    pub closeness: bool,

    /// Compute node degree
    #[arg(long)]
    pub degree: bool,

    /// Compute straightness
    #[arg(long)]
    pub straightness: bool,

    /// Compute eigenvector centrality
    #[arg(long)]
    pub eigenvector: bool,

    /// Skip the hexagonal aggregation
    #[arg(long)]
    pub no_h3: bool,

    /// Hexagon resolution
    #[arg(long, default_value = "7")]
    pub h3_res: u8,

    /// Edge attribute used for coloring
    #[arg(long, default_value = "length")]
    pub color_by: String,

    /// Let the service fall back to a synthetic network
    #[arg(long)]
    pub allow_synthetic: bool,

    /// Write the downloadable artifacts into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}
