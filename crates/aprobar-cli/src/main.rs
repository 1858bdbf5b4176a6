//! Aprobador CLI: coverage gating and support tooling for browser
//! acceptance suites
//!
//! ## Usage
//!
//! ```bash
//! aprobador validate output.json              # Gate on pass percentage
//! aprobador validate output.json --min-coverage 90
//! aprobador compare baseline.png shot.png     # Image similarity check
//! aprobador docs resources --output documentation
//! aprobador seed suite.db --script init.sql
//! aprobador init                              # Scaffold suite settings
//! ```

use aprobador::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command {
        Commands::Validate(args) => handlers::validate::execute_validate(&config, &args),
        Commands::Compare(args) => handlers::compare::execute_compare(&config, &args),
        Commands::Docs(args) => handlers::docs::execute_docs(&config, &args),
        Commands::Seed(args) => handlers::seed::execute_seed(&config, &args),
        Commands::Init(args) => handlers::init::execute_init(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
