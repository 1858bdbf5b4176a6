//! Coverage report rendering and persistence.
//!
//! The renderer is deterministic: given the same statistics, verdict, and
//! timestamp it always produces the same Markdown. The writer owns the
//! timestamped file naming so consecutive runs never collide.

use crate::coverage::CoverageVerdict;
use crate::execution::ExecutionStatistics;
use crate::result::AprobarResult;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of every generated report file name
pub const REPORT_FILE_PREFIX: &str = "test_coverage_report_";

/// Render the coverage report as Markdown.
///
/// The timestamp is a parameter so callers (and tests) control it; the
/// rest of the output depends only on the statistics and verdict.
#[must_use]
pub fn render_markdown(
    stats: &ExecutionStatistics,
    verdict: &CoverageVerdict,
    generated_at: DateTime<Local>,
) -> String {
    let status = if verdict.passed {
        "Passed ✅"
    } else {
        "Failed ❌"
    };

    let mut report = format!(
        "## Test Coverage Report\n\
         \n\
         ### Summary\n\
         | Metric | Value |\n\
         |--------|-------|\n\
         | Coverage Status | {status} |\n\
         | Minimum Required | {min}% |\n\
         | Current Coverage | {current:.2}% |\n\
         \n\
         ### Test Details\n\
         | Category | Count |\n\
         |----------|-------|\n\
         | Total Tests | {total} |\n\
         | Passed | {passed} |\n\
         | Failed | {failed} |\n\
         | Skipped | {skipped} |\n\
         \n\
         ### Suite Breakdown\n\
         | Suite | Total | Passed | Coverage |\n\
         |-------|-------|--------|----------|\n",
        min = verdict.min_coverage,
        current = verdict.pass_percentage,
        total = stats.total,
        passed = stats.passed,
        failed = stats.failed,
        skipped = stats.skipped,
    );

    for suite in &stats.suites {
        report += &format!(
            "| {} | {} | {} | {:.2}% |\n",
            suite.name,
            suite.total,
            suite.passed,
            suite.pass_percentage()
        );
    }

    report += &format!("\n*Generated: {}*\n", generated_at.format("%Y-%m-%d %H:%M:%S"));
    report
}

/// Write a rendered report into the output directory.
///
/// Creates the directory if absent and names the file after the
/// generation timestamp. Returns the path of the written file.
///
/// # Errors
///
/// Returns an I/O error when the directory cannot be created or the file
/// cannot be written.
pub fn write_report(
    report: &str,
    output_dir: &Path,
    generated_at: DateTime<Local>,
) -> AprobarResult<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!(
        "{REPORT_FILE_PREFIX}{}.md",
        generated_at.format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(filename);
    std::fs::write(&path, report.as_bytes())?;

    info!("Markdown report written to {}", path.display());
    Ok(path)
}
