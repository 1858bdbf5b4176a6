//! Seed command handler: database seeding with retry.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::ProgressReporter;
use crate::SeedArgs;
use aprobar::{RetryPolicy, SeedDatabase};
use std::time::Duration;

/// Execute the seed command
pub fn execute_seed(config: &CliConfig, args: &SeedArgs) -> CliResult<()> {
    let reporter = ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let policy = RetryPolicy {
        timeout: Duration::from_secs(args.timeout),
        interval: Duration::from_secs(args.interval),
    };

    reporter.info(&format!("Connecting to {}...", args.database.display()));
    let db = SeedDatabase::connect_with_retry(&args.database, policy)?;

    db.run_script(&args.script)?;
    reporter.success(&format!(
        "Database {} seeded from {}",
        args.database.display(),
        args.script.display()
    ));
    Ok(())
}
