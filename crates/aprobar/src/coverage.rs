//! Coverage evaluation.
//!
//! Compares a run's pass percentage against a configured minimum. The
//! aggregate computation treats an empty run as an error; per-suite
//! percentages are handled in [`crate::execution::SuiteStatistics`].

use crate::execution::ExecutionStatistics;
use crate::result::{AprobarError, AprobarResult};

/// Outcome of evaluating a run against a minimum coverage threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageVerdict {
    /// Percentage of executed tests that passed
    pub pass_percentage: f64,
    /// Configured minimum percentage
    pub min_coverage: f64,
    /// Whether the run met the minimum (inclusive at the boundary)
    pub passed: bool,
}

/// Evaluate a run's statistics against a minimum coverage threshold.
///
/// Pure function: no side effects. A pass percentage exactly equal to
/// the minimum passes.
///
/// # Errors
///
/// Returns [`AprobarError::Computation`] when the run contains no tests,
/// since the pass percentage is undefined for an empty run.
pub fn evaluate_coverage(
    stats: &ExecutionStatistics,
    min_coverage: f64,
) -> AprobarResult<CoverageVerdict> {
    if stats.total == 0 {
        return Err(AprobarError::Computation {
            message: "execution result contains no tests; pass percentage is undefined"
                .to_string(),
        });
    }

    let pass_percentage = stats.passed as f64 / stats.total as f64 * 100.0;
    Ok(CoverageVerdict {
        pass_percentage,
        min_coverage,
        passed: pass_percentage >= min_coverage,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stats(total: u64, passed: u64, failed: u64, skipped: u64) -> ExecutionStatistics {
        ExecutionStatistics {
            total,
            passed,
            failed,
            skipped,
            suites: Vec::new(),
        }
    }

    #[test]
    fn test_percentage_matches_ratio() {
        let verdict = evaluate_coverage(&stats(10, 8, 1, 1), 80.0).unwrap();
        assert!((verdict.pass_percentage - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let verdict = evaluate_coverage(&stats(10, 8, 1, 1), 80.0).unwrap();
        assert!(verdict.passed);
    }

    #[test]
    fn test_below_threshold_fails() {
        let verdict = evaluate_coverage(&stats(10, 8, 1, 1), 90.0).unwrap();
        assert!(!verdict.passed);
        assert!((verdict.min_coverage - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_passing() {
        let verdict = evaluate_coverage(&stats(7, 7, 0, 0), 100.0).unwrap();
        assert!((verdict.pass_percentage - 100.0).abs() < 1e-9);
        assert!(verdict.passed);
    }

    #[test]
    fn test_zero_total_is_an_error() {
        let result = evaluate_coverage(&stats(0, 0, 0, 0), 80.0);
        assert!(matches!(result, Err(AprobarError::Computation { .. })));
    }

    #[test]
    fn test_fractional_percentage() {
        // 2/3 = 66.666...%
        let verdict = evaluate_coverage(&stats(3, 2, 1, 0), 66.0).unwrap();
        assert!((verdict.pass_percentage - 200.0 / 3.0).abs() < 1e-9);
        assert!(verdict.passed);

        let verdict = evaluate_coverage(&stats(3, 2, 1, 0), 67.0).unwrap();
        assert!(!verdict.passed);
    }
}
