//! Suite settings.
//!
//! The acceptance suite's run-wide knobs: which browser, which target
//! environment, viewport, device emulation, and browser-context options.
//! Settings are plain data loaded from a JSON file at the process
//! boundary and passed down explicitly; nothing here is process-global.

use crate::result::{AprobarError, AprobarResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default settings file name
pub const SETTINGS_FILE: &str = "aprobar.json";

/// Browser engine driving the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// Chromium-based browser
    #[default]
    Chromium,
    /// Firefox
    Firefox,
    /// WebKit
    Webkit,
}

/// Target environment for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    /// Development
    Dev,
    /// User acceptance testing
    #[default]
    Uat,
    /// Release candidate
    Rc,
    /// Production
    Prod,
}

/// Browser-context options forwarded to the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Accept file downloads
    pub accept_downloads: bool,
    /// Bypass Content-Security-Policy
    pub bypass_csp: bool,
    /// Ignore HTTPS certificate errors
    pub ignore_https_errors: bool,
    /// Enable JavaScript
    pub java_script_enabled: bool,
    /// Emulate offline mode
    pub offline: bool,
    /// Locale override
    pub locale: Option<String>,
    /// User-agent override
    pub user_agent: Option<String>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            accept_downloads: true,
            bypass_csp: false,
            ignore_https_errors: false,
            java_script_enabled: true,
            offline: false,
            locale: None,
            user_agent: None,
        }
    }
}

/// Run-wide settings for the acceptance suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteSettings {
    /// Browser engine
    pub browser: BrowserKind,
    /// Per-action browser timeout in seconds
    pub browser_timeout_secs: u64,
    /// Run without a visible browser window
    pub headless: bool,
    /// Viewport width in pixels
    pub resolution_width: u32,
    /// Viewport height in pixels
    pub resolution_height: u32,
    /// Emulate a mobile device
    pub mobile: bool,
    /// Device name used when `mobile` is set
    pub device_name: String,
    /// Whether the run executes inside a CI pipeline
    pub pipeline: bool,
    /// Active environment
    pub environment: Environment,
    /// Base URL per environment
    pub urls: HashMap<Environment, String>,
    /// UI language code
    pub language: String,
    /// Browser-context options
    pub context: ContextOptions,
}

impl Default for SuiteSettings {
    fn default() -> Self {
        let default_url = "https://demoqa.com/".to_string();
        let urls = [
            Environment::Dev,
            Environment::Uat,
            Environment::Rc,
            Environment::Prod,
        ]
        .into_iter()
        .map(|env| (env, default_url.clone()))
        .collect();

        Self {
            browser: BrowserKind::Chromium,
            browser_timeout_secs: 40,
            headless: false,
            resolution_width: 1366,
            resolution_height: 768,
            mobile: false,
            device_name: "Nexus 5".to_string(),
            pipeline: false,
            environment: Environment::Uat,
            urls,
            language: "PT".to_string(),
            context: ContextOptions::default(),
        }
    }
}

impl SuiteSettings {
    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`AprobarError::Settings`] when the file is missing or not
    /// valid settings JSON.
    pub fn load(path: &Path) -> AprobarResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AprobarError::Settings {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        serde_json::from_str(&contents).map_err(|e| AprobarError::Settings {
            message: format!("{} is not a valid settings file: {e}", path.display()),
        })
    }

    /// Base URL of the active environment.
    ///
    /// # Errors
    ///
    /// Returns [`AprobarError::Settings`] when the active environment has
    /// no URL configured.
    pub fn base_url(&self) -> AprobarResult<&str> {
        self.urls
            .get(&self.environment)
            .map(String::as_str)
            .ok_or_else(|| AprobarError::Settings {
                message: format!("no URL configured for environment {:?}", self.environment),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = SuiteSettings::default();
        assert_eq!(settings.browser, BrowserKind::Chromium);
        assert_eq!(settings.browser_timeout_secs, 40);
        assert!(!settings.headless);
        assert_eq!(settings.environment, Environment::Uat);
        assert_eq!(settings.urls.len(), 4);
        assert!(settings.context.accept_downloads);
    }

    #[test]
    fn test_base_url_resolves_active_environment() {
        let mut settings = SuiteSettings::default();
        settings
            .urls
            .insert(Environment::Prod, "https://shop.example/".to_string());
        settings.environment = Environment::Prod;

        assert_eq!(settings.base_url().unwrap(), "https://shop.example/");
    }

    #[test]
    fn test_base_url_missing_environment() {
        let mut settings = SuiteSettings::default();
        settings.urls.clear();

        assert!(matches!(
            settings.base_url(),
            Err(AprobarError::Settings { .. })
        ));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"headless": true, "environment": "DEV"}"#).unwrap();

        let settings = SuiteSettings::load(&path).unwrap();
        assert!(settings.headless);
        assert_eq!(settings.environment, Environment::Dev);
        assert_eq!(settings.browser, BrowserKind::Chromium);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = SuiteSettings::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(AprobarError::Settings { .. })));
    }

    #[test]
    fn test_round_trip() {
        let settings = SuiteSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: SuiteSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
