//! Validate command handler: the coverage gate.
//!
//! Runs the linear pipeline load -> evaluate -> render -> write and
//! decides the process outcome. Any pipeline error, or an unmet
//! threshold after a successful pipeline, maps to a failing exit.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::ProgressReporter;
use crate::ValidateArgs;
use aprobar::{evaluate_coverage, load_execution_result, render_markdown, write_report};
use chrono::Local;

/// Execute the validate command
pub fn execute_validate(config: &CliConfig, args: &ValidateArgs) -> CliResult<()> {
    let reporter = ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    if !(0.0..=100.0).contains(&args.min_coverage) {
        return Err(CliError::invalid_argument(format!(
            "--min-coverage must be between 0 and 100, got {}",
            args.min_coverage
        )));
    }

    let stats = load_execution_result(&args.result_file)?;
    let verdict = evaluate_coverage(&stats, args.min_coverage)?;

    let generated_at = Local::now();
    let report = render_markdown(&stats, &verdict, generated_at);
    let path = write_report(&report, &args.output_dir, generated_at)?;
    reporter.info(&format!("Markdown report written to {}", path.display()));

    if verdict.passed {
        reporter.success(&format!(
            "Test coverage approved: {:.2}%",
            verdict.pass_percentage
        ));
        Ok(())
    } else {
        reporter.failure(&format!(
            "Test coverage of {:.2}% is below the required minimum of {}%",
            verdict.pass_percentage, verdict.min_coverage
        ));
        Err(CliError::coverage_validation(format!(
            "coverage {:.2}% is below the required minimum of {}%",
            verdict.pass_percentage, verdict.min_coverage
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aprobar::REPORT_FILE_PREFIX;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_result(dir: &TempDir, passed: u64, failed: u64, skipped: u64) -> PathBuf {
        let total = passed + failed + skipped;
        let path = dir.path().join("output.json");
        std::fs::write(
            &path,
            format!(
                r#"{{"statistics": {{"total": {{"total": {total}, "passed": {passed}, "failed": {failed}, "skipped": {skipped}}}}}}}"#
            ),
        )
        .unwrap();
        path
    }

    fn args(result_file: PathBuf, min_coverage: f64, output_dir: PathBuf) -> ValidateArgs {
        ValidateArgs {
            result_file,
            min_coverage,
            output_dir,
        }
    }

    #[test]
    fn test_validate_passes_at_threshold() {
        let temp = TempDir::new().unwrap();
        let result_file = write_result(&temp, 8, 1, 1);
        let output_dir = temp.path().join("reports");

        let config = CliConfig::default();
        let result = execute_validate(&config, &args(result_file, 80.0, output_dir.clone()));

        assert!(result.is_ok());
        let reports: Vec<_> = std::fs::read_dir(&output_dir).unwrap().collect();
        assert_eq!(reports.len(), 1);
        let name = reports[0].as_ref().unwrap().file_name();
        assert!(name.to_string_lossy().starts_with(REPORT_FILE_PREFIX));
    }

    #[test]
    fn test_validate_fails_below_threshold_but_writes_report() {
        let temp = TempDir::new().unwrap();
        let result_file = write_result(&temp, 8, 1, 1);
        let output_dir = temp.path().join("reports");

        let config = CliConfig::default();
        let result = execute_validate(&config, &args(result_file, 90.0, output_dir.clone()));

        assert!(matches!(
            result,
            Err(CliError::CoverageValidation { .. })
        ));
        // The report is still generated so the failure can be inspected
        assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 1);
    }

    #[test]
    fn test_validate_zero_total_writes_no_report() {
        let temp = TempDir::new().unwrap();
        let result_file = write_result(&temp, 0, 0, 0);
        let output_dir = temp.path().join("reports");

        let config = CliConfig::default();
        let result = execute_validate(&config, &args(result_file, 80.0, output_dir.clone()));

        assert!(result.is_err());
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_validate_rejects_out_of_range_minimum() {
        let temp = TempDir::new().unwrap();
        let result_file = write_result(&temp, 5, 0, 0);

        let config = CliConfig::default();
        let result = execute_validate(
            &config,
            &args(result_file, 150.0, temp.path().join("reports")),
        );
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn test_validate_missing_result_file() {
        let temp = TempDir::new().unwrap();
        let config = CliConfig::default();
        let result = execute_validate(
            &config,
            &args(
                temp.path().join("absent.json"),
                80.0,
                temp.path().join("reports"),
            ),
        );
        assert!(result.is_err());
    }
}
