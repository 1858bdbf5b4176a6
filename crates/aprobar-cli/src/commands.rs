//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Aprobador: CLI for Aprobar - coverage gating and support tooling for
/// browser acceptance suites
#[derive(Parser, Debug)]
#[command(name = "aprobador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate test coverage and generate a Markdown report
    Validate(ValidateArgs),

    /// Compare two images for similarity
    Compare(CompareArgs),

    /// Generate keyword documentation
    Docs(DocsArgs),

    /// Seed the test database from a SQL script
    Seed(SeedArgs),

    /// Bootstrap the suite environment
    Init(InitArgs),
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Detect terminal support
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the execution-result file produced by the test runner
    pub result_file: PathBuf,

    /// Minimum pass percentage required for the run to be approved
    #[arg(long, default_value = "80")]
    pub min_coverage: f64,

    /// Directory where the Markdown report is written
    #[arg(long, default_value = "test_reports")]
    pub output_dir: PathBuf,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Reference image
    pub reference: PathBuf,

    /// Candidate image compared against the reference
    pub candidate: PathBuf,

    /// Minimum similarity percentage for the images to match
    #[arg(long, default_value = "90")]
    pub threshold: f64,

    /// Compare in grayscale, resizing the candidate to the reference's size
    #[arg(long)]
    pub grayscale: bool,

    /// Resize the candidate when dimensions differ (RGB comparison)
    #[arg(long)]
    pub resize: bool,
}

/// Arguments for the docs command
#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// Directory scanned for keyword files
    #[arg(default_value = "resources")]
    pub resources: PathBuf,

    /// Output directory for the generated documentation
    #[arg(short, long, default_value = "documentation")]
    pub output: PathBuf,

    /// File names to skip
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Project name shown on the index page
    #[arg(long)]
    pub project_name: Option<String>,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// SQLite database file to seed
    pub database: PathBuf,

    /// SQL script executed against the database
    #[arg(short, long, default_value = "init.sql")]
    pub script: PathBuf,

    /// Seconds to keep retrying the connection
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Seconds between connection attempts
    #[arg(long, default_value = "5")]
    pub interval: u64,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing settings file
    #[arg(short, long)]
    pub force: bool,
}
