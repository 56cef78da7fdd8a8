use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "AlphaRING CLI - A command-line interface for AlphaRING, a variant-effect scoring tool that predicts the pathogenicity of single-residue protein substitutions from residue-interaction networks and stability estimates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score substitutions for pathogenicity against one predicted structure.
    Score(ScoreArgs),
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    // --- Inputs ---
    /// Path to the predicted structure model in PDB format, with per-residue
    /// confidence values in the B-factor column.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub model: PathBuf,

    /// Path to the contact-detection node table (tab-separated).
    #[arg(long, required = true, value_name = "PATH")]
    pub nodes: PathBuf,

    /// Path to the contact-detection edge table (tab-separated).
    #[arg(long, required = true, value_name = "PATH")]
    pub edges: PathBuf,

    /// Path to the position-scan output with two rows per substitution.
    #[arg(long, required = true, value_name = "PATH")]
    pub scan: PathBuf,

    /// Path to the classifier artifact in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub artifact: PathBuf,

    /// Substitutions to score, e.g. 'YA229S', in the same order they were
    /// submitted to the position scan. Comma-separated or repeated.
    #[arg(
        short,
        long,
        required = true,
        value_name = "SUBSTITUTION",
        value_delimiter = ','
    )]
    pub substitutions: Vec<String>,

    // --- Outputs ---
    /// Path for the tab-separated scores table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Also write the weighted node and edge tables next to the output.
    #[arg(long)]
    pub write_network: bool,
}
