//! Init command handler: suite environment bootstrap.
//!
//! Detects whether the process runs inside a CI pipeline and scaffolds
//! the default settings file, forcing headless mode under a pipeline.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::ProgressReporter;
use crate::InitArgs;
use aprobar::{SuiteSettings, SETTINGS_FILE};

/// Environment variables that mark a CI pipeline execution
pub const PIPELINE_ENV_VARS: &[&str] = &["CI", "JENKINS_HOME", "GITHUB_ACTIONS"];

/// Check if the current process runs inside a CI/CD pipeline
#[must_use]
pub fn is_pipeline_execution() -> bool {
    PIPELINE_ENV_VARS
        .iter()
        .any(|var| std::env::var(var).map(|value| is_truthy(&value)).unwrap_or(false))
}

/// Only explicit truthy values count; a path-like `JENKINS_HOME` does not.
fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Execute the init command
pub fn execute_init(config: &CliConfig, args: &InitArgs) -> CliResult<()> {
    let reporter = ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let settings_path = args.path.join(SETTINGS_FILE);
    if settings_path.exists() && !args.force {
        reporter.info(&format!(
            "Settings file already present: {} (use --force to overwrite)",
            settings_path.display()
        ));
        return Ok(());
    }

    let mut settings = SuiteSettings::default();
    if is_pipeline_execution() {
        reporter.info("Pipeline execution detected, forcing headless mode");
        settings.pipeline = true;
        settings.headless = true;
    }

    std::fs::create_dir_all(&args.path)?;
    let contents = serde_json::to_string_pretty(&settings)
        .map_err(aprobar::AprobarError::from)?;
    std::fs::write(&settings_path, contents)?;

    reporter.success(&format!("Created {}", settings_path.display()));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(path: std::path::PathBuf, force: bool) -> InitArgs {
        InitArgs { path, force }
    }

    #[test]
    fn test_init_creates_settings_file() {
        let temp = TempDir::new().unwrap();
        let config = CliConfig::default();

        execute_init(&config, &args(temp.path().to_path_buf(), false)).unwrap();

        let path = temp.path().join(SETTINGS_FILE);
        assert!(path.exists());
        let settings = SuiteSettings::load(&path).unwrap();
        assert_eq!(settings.browser_timeout_secs, 40);
    }

    #[test]
    fn test_init_does_not_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{\"headless\": true}").unwrap();

        let config = CliConfig::default();
        execute_init(&config, &args(temp.path().to_path_buf(), false)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"headless\": true}"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        std::fs::write(&path, "stale").unwrap();

        let config = CliConfig::default();
        execute_init(&config, &args(temp.path().to_path_buf(), true)).unwrap();

        assert!(SuiteSettings::load(&path).is_ok());
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("true"));
        assert!(is_truthy("1"));
        assert!(is_truthy(" YES "));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("/var/jenkins_home"));
        assert!(!is_truthy(""));
    }
}
