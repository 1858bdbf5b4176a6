//! File manipulation helpers for test suites.
//!
//! Covers the recurring filesystem chores of a data-driven acceptance
//! suite: clearing scratch directories between runs, materializing
//! fixture files from strings or delimited data, and collecting
//! generated artifacts by extension.

use crate::result::AprobarResult;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Delete the contents of a directory, leaving the directory in place.
///
/// A missing directory is a no-op. Subdirectories are removed
/// recursively.
///
/// # Errors
///
/// Returns an I/O error when an entry cannot be removed.
pub fn clear_directory(dir: &Path) -> AprobarResult<()> {
    if !dir.exists() {
        debug!("Nothing to clear, {} does not exist", dir.display());
        return Ok(());
    }

    for entry in std::fs::read_dir(dir)?.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
        debug!("Removed {}", path.display());
    }

    info!("Cleared directory {}", dir.display());
    Ok(())
}

/// Create a file from string data inside a directory.
///
/// The directory is created if absent. Returns the path of the written
/// file.
///
/// # Errors
///
/// Returns an I/O error when the directory or file cannot be created.
pub fn write_string_file(dir: &Path, name: &str, contents: &str) -> AprobarResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents.as_bytes())?;
    debug!("Created file {}", path.display());
    Ok(path)
}

/// List the files directly inside a directory that carry the given
/// extension (without the leading dot).
///
/// # Errors
///
/// Returns an I/O error when the directory cannot be read.
pub fn files_with_extension(dir: &Path, extension: &str) -> AprobarResult<Vec<PathBuf>> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    matches.sort();
    Ok(matches)
}

/// Create one file per row of a delimited data file.
///
/// The data file is plain comma-separated text with a header row; no
/// quoting rules are applied. The target directory is recreated from
/// scratch, and each non-empty value of `column` becomes the contents of
/// a uniquely named file with the requested extension. Returns the paths
/// of the created files in row order.
///
/// # Errors
///
/// Returns an I/O error for filesystem failures and a report-style error
/// when the named column is missing from the header.
pub fn create_files_from_csv(
    dir: &Path,
    csv_path: &Path,
    column: &str,
    extension: &str,
) -> AprobarResult<Vec<PathBuf>> {
    let contents = std::fs::read_to_string(csv_path)?;
    let mut lines = contents.lines();

    let header = lines.next().unwrap_or_default();
    let column_index = header
        .split(',')
        .map(str::trim)
        .position(|name| name == column)
        .ok_or_else(|| crate::result::AprobarError::Fixture {
            message: format!(
                "column '{column}' not found in {}",
                csv_path.display()
            ),
        })?;

    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
        info!("Recreating directory {}", dir.display());
    }
    std::fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut created = Vec::new();
    for (row, line) in lines.enumerate() {
        let value = line.split(',').nth(column_index).unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        let path = dir.join(format!("Test_{stamp}_{row}.{extension}"));
        std::fs::write(&path, value.as_bytes())?;
        debug!("Created file {}", path.display());
        created.push(path);
    }

    info!(
        "Created {} file(s) from {}",
        created.len(),
        csv_path.display()
    );
    Ok(created)
}
