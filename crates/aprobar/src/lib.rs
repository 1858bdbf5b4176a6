//! Aprobar: support library for a browser-based acceptance-test suite.
//!
//! The crate collects the suite's reusable building blocks: loading the
//! runner's execution result, gating a run on its pass percentage,
//! rendering and persisting coverage reports, comparing screenshots,
//! manipulating fixture files, seeding the test database, and generating
//! keyword documentation.
//!
//! The coverage pipeline is strictly linear:
//!
//! ```text
//! load -> evaluate -> render -> write -> decide
//! ```
//!
//! Each run is independent; the only artifact left behind is the
//! uniquely timestamped report file.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Coverage evaluation against a configured minimum.
pub mod coverage;
/// Seed database with fixed-interval connection retry.
pub mod db;
/// Keyword documentation scanning and HTML index generation.
pub mod docgen;
/// Execution-result loading and validation.
pub mod execution;
/// Filesystem helpers for data-driven suites.
pub mod file_ops;
/// JSON fixture loading.
pub mod fixtures;
/// Image similarity keywords.
pub mod image_compare;
/// Markdown report rendering and persistence.
pub mod report;
/// Result and error types.
pub mod result;
/// Run-wide suite settings.
pub mod settings;

pub use coverage::{evaluate_coverage, CoverageVerdict};
pub use db::{RetryPolicy, SeedDatabase};
pub use docgen::{scan_keyword_files, write_file_page, write_index, DocgenConfig, KeywordFile};
pub use execution::{load_execution_result, ExecutionStatistics, SuiteStatistics};
pub use fixtures::{load_fixture, load_fixture_as};
pub use image_compare::{CompareConfig, ImageComparator, SimilarityResult};
pub use report::{render_markdown, write_report, REPORT_FILE_PREFIX};
pub use result::{AprobarError, AprobarResult};
pub use settings::{BrowserKind, Environment, SuiteSettings, SETTINGS_FILE};
