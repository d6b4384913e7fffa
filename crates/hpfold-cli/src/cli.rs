use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hpfold - a command-line interface for searching low-energy foldings of hydrophobic-polar polymer sequences on the 2D square lattice.",
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

    /// Set the number of threads for parallel trials.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for low-energy foldings of an H/P sequence over repeated independent trials.
    Fold(FoldArgs),
    /// Rebuild the fold realized by a move sequence and render it.
    Render(RenderArgs),
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug)]
pub struct FoldArgs {
    /// The monomer sequence over the H/P alphabet (e.g. HPHPPH).
    /// Overrides the `sequence` entry of the config file.
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of independent trials.
    #[arg(short, long, value_name = "INT")]
    pub trials: Option<usize>,

    /// Override the per-trial iteration budget.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Override the number of consecutive non-improving proposals that ends a trial.
    #[arg(long, value_name = "INT")]
    pub stall_patience: Option<usize>,

    /// Override the retry budget for sampling the initial self-avoiding walk.
    #[arg(long, value_name = "INT")]
    pub max_sample_attempts: Option<usize>,

    /// Seed for reproducible trials. Unseeded runs draw from OS entropy.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Write per-trial statistics to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the best fold(s) as SVG to this path (numbered when several tie).
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// The monomer sequence over the H/P alphabet.
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// The move sequence over the L/F/R alphabet, one move shorter than the sequence.
    #[arg(short, long, required = true, value_name = "MOVES")]
    pub moves: String,

    /// Write an SVG rendering to this path instead of ASCII art on stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
