//! JSON fixture loading.

use crate::result::{AprobarError, AprobarResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a JSON fixture file from a directory as a raw value.
///
/// # Errors
///
/// Returns [`AprobarError::Fixture`] when the file is missing or not
/// valid JSON.
pub fn load_fixture(dir: &Path, name: &str) -> AprobarResult<serde_json::Value> {
    load_fixture_as(dir, name)
}

/// Load a JSON fixture file and deserialize it into a typed value.
///
/// # Errors
///
/// Returns [`AprobarError::Fixture`] when the file is missing, not valid
/// JSON, or does not match the target type.
pub fn load_fixture_as<T: DeserializeOwned>(dir: &Path, name: &str) -> AprobarResult<T> {
    let path = dir.join(name);
    let contents = std::fs::read_to_string(&path).map_err(|e| AprobarError::Fixture {
        message: format!("failed to read {}: {e}", path.display()),
    })?;
    serde_json::from_str(&contents).map_err(|e| AprobarError::Fixture {
        message: format!("{} is not valid JSON: {e}", path.display()),
    })
}
