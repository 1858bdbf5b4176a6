//! Execution-result loading.
//!
//! The test runner persists each run as a JSON artifact with aggregate
//! counts and a per-suite breakdown. The schema is owned by the runner;
//! this module mirrors it, validates it, and hands back an immutable
//! [`ExecutionStatistics`] value for the rest of the pipeline.

use crate::result::{AprobarError, AprobarResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Aggregate outcome counts as stored in the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct TotalRecord {
    total: u64,
    passed: u64,
    failed: u64,
    skipped: u64,
}

/// Per-suite entry as stored in the artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SuiteRecord {
    name: String,
    total: u64,
    passed: u64,
}

/// On-disk shape of the execution-result artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RunRecord {
    statistics: StatisticsRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatisticsRecord {
    total: TotalRecord,
    #[serde(default)]
    suites: Vec<SuiteRecord>,
}

/// Statistics for a single suite within the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteStatistics {
    /// Suite name
    pub name: String,
    /// Number of tests in the suite
    pub total: u64,
    /// Number of passing tests in the suite
    pub passed: u64,
}

impl SuiteStatistics {
    /// Pass percentage for this suite.
    ///
    /// A suite may legitimately contain zero executed tests (fully
    /// skipped); that reports 0% rather than erroring.
    #[must_use]
    pub fn pass_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Statistics for a whole test run, loaded from the result artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStatistics {
    /// Total number of tests executed
    pub total: u64,
    /// Number of passing tests
    pub passed: u64,
    /// Number of failing tests
    pub failed: u64,
    /// Number of skipped tests
    pub skipped: u64,
    /// Per-suite breakdown, in artifact order
    pub suites: Vec<SuiteStatistics>,
}

impl ExecutionStatistics {
    fn from_record(record: RunRecord) -> AprobarResult<Self> {
        let totals = record.statistics.total;
        if totals.passed + totals.failed + totals.skipped != totals.total {
            return Err(AprobarError::ResultLoad {
                message: format!(
                    "inconsistent counts: total {} != passed {} + failed {} + skipped {}",
                    totals.total, totals.passed, totals.failed, totals.skipped
                ),
            });
        }

        let mut suites = Vec::with_capacity(record.statistics.suites.len());
        for suite in record.statistics.suites {
            if suite.passed > suite.total {
                return Err(AprobarError::ResultLoad {
                    message: format!(
                        "suite '{}' reports {} passed out of {} tests",
                        suite.name, suite.passed, suite.total
                    ),
                });
            }
            suites.push(SuiteStatistics {
                name: suite.name,
                total: suite.total,
                passed: suite.passed,
            });
        }

        Ok(Self {
            total: totals.total,
            passed: totals.passed,
            failed: totals.failed,
            skipped: totals.skipped,
            suites,
        })
    }
}

/// Load and validate an execution-result artifact.
///
/// # Errors
///
/// Returns [`AprobarError::ResultLoad`] when the file is missing,
/// unreadable, not valid JSON, or carries inconsistent counts.
pub fn load_execution_result(path: &Path) -> AprobarResult<ExecutionStatistics> {
    let contents = std::fs::read_to_string(path).map_err(|e| AprobarError::ResultLoad {
        message: format!("failed to read {}: {e}", path.display()),
    })?;

    let record: RunRecord =
        serde_json::from_str(&contents).map_err(|e| AprobarError::ResultLoad {
            message: format!("{} is not a valid execution result: {e}", path.display()),
        })?;

    let stats = ExecutionStatistics::from_record(record)?;
    debug!(
        total = stats.total,
        passed = stats.passed,
        suites = stats.suites.len(),
        "Loaded execution result from {}",
        path.display()
    );
    Ok(stats)
}
