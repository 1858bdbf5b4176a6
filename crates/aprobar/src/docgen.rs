//! Keyword documentation generation.
//!
//! Walks the suite's resources tree for keyword files, extracts keyword
//! names and their `[Documentation]` text, and emits one HTML page per
//! file plus an index grouping pages by directory. The index orders
//! directories with libraries first, then keywords, then everything
//! else, matching how readers navigate the suite.

use crate::result::{AprobarError, AprobarResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for documentation generation
#[derive(Debug, Clone)]
pub struct DocgenConfig {
    /// Directory scanned for keyword files
    pub resources_dir: PathBuf,
    /// Output directory for generated pages
    pub output_dir: PathBuf,
    /// File names skipped during the scan
    pub excluded: Vec<String>,
    /// Project name shown on the index page
    pub project_name: String,
}

impl DocgenConfig {
    /// Create a configuration for the given directories
    #[must_use]
    pub fn new(resources_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            output_dir: output_dir.into(),
            excluded: Vec::new(),
            project_name: "Test Automation".to_string(),
        }
    }

    /// Set the excluded file names
    #[must_use]
    pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Set the project name
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }
}

/// Kind of documentable file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.resource` keyword file
    Resource,
    /// `.robot` suite file
    Robot,
}

impl FileKind {
    /// Human-readable label used on the index page
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resource => "Resource",
            Self::Robot => "Robot",
        }
    }
}

/// A keyword and its documentation lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDoc {
    /// Keyword name
    pub name: String,
    /// Documentation lines, without markup
    pub doc: Vec<String>,
}

/// A documentable keyword file
#[derive(Debug, Clone)]
pub struct KeywordFile {
    /// Absolute path of the source file
    pub path: PathBuf,
    /// Path relative to the resources directory
    pub relative: PathBuf,
    /// File kind
    pub kind: FileKind,
    /// Extracted keywords
    pub keywords: Vec<KeywordDoc>,
}

/// Scan the resources directory for keyword files.
///
/// Hidden directories and excluded file names are skipped. Files are
/// returned sorted by relative path.
///
/// # Errors
///
/// Returns [`AprobarError::DocGeneration`] when the resources directory
/// does not exist, and I/O errors for unreadable entries.
pub fn scan_keyword_files(config: &DocgenConfig) -> AprobarResult<Vec<KeywordFile>> {
    if !config.resources_dir.is_dir() {
        return Err(AprobarError::DocGeneration {
            message: format!(
                "resources directory not found: {}",
                config.resources_dir.display()
            ),
        });
    }

    let mut files = Vec::new();
    walk(&config.resources_dir, config, &mut files)?;
    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    info!(
        "Found {} keyword file(s) under {}",
        files.len(),
        config.resources_dir.display()
    );
    Ok(files)
}

fn walk(dir: &Path, config: &DocgenConfig, out: &mut Vec<KeywordFile>) -> AprobarResult<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.filter_map(Result::ok).collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            if !name.starts_with('.') {
                walk(&path, config, out)?;
            }
            continue;
        }
        if config.excluded.iter().any(|excluded| excluded == &name) {
            debug!("Skipping excluded file {}", path.display());
            continue;
        }

        let kind = match path.extension().and_then(|ext| ext.to_str()) {
            Some("resource") => FileKind::Resource,
            Some("robot") => FileKind::Robot,
            _ => continue,
        };

        let contents = std::fs::read_to_string(&path)?;
        let keywords = parse_keywords(&contents);
        let relative = path
            .strip_prefix(&config.resources_dir)
            .unwrap_or(&path)
            .to_path_buf();

        out.push(KeywordFile {
            path,
            relative,
            kind,
            keywords,
        });
    }
    Ok(())
}

/// Extract keywords and their documentation from a keyword file.
///
/// Only the `*** Keywords ***` section is considered: non-indented lines
/// name keywords, and `[Documentation]` settings plus their `...`
/// continuations form the documentation text.
#[must_use]
pub fn parse_keywords(contents: &str) -> Vec<KeywordDoc> {
    let mut keywords = Vec::new();
    let mut current: Option<KeywordDoc> = None;
    let mut in_section = false;
    let mut in_doc = false;

    for line in contents.lines() {
        let trimmed = line.trim_end();

        if trimmed.starts_with("***") {
            if let Some(keyword) = current.take() {
                keywords.push(keyword);
            }
            in_section = trimmed.to_ascii_lowercase().contains("keywords");
            in_doc = false;
            continue;
        }
        if !in_section || trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !trimmed.starts_with(' ') && !trimmed.starts_with('\t') {
            if let Some(keyword) = current.take() {
                keywords.push(keyword);
            }
            current = Some(KeywordDoc {
                name: trimmed.to_string(),
                doc: Vec::new(),
            });
            in_doc = false;
        } else if let Some(ref mut keyword) = current {
            let body = trimmed.trim_start();
            if let Some(rest) = body.strip_prefix("[Documentation]") {
                keyword.doc.push(rest.trim().to_string());
                in_doc = true;
            } else if in_doc {
                if let Some(rest) = body.strip_prefix("...") {
                    keyword.doc.push(rest.trim().to_string());
                } else {
                    in_doc = false;
                }
            }
        }
    }
    if let Some(keyword) = current {
        keywords.push(keyword);
    }
    keywords
}

/// Ordering key for index directories: libraries first, then keywords,
/// then everything else, alphabetical within each group.
#[must_use]
pub fn dir_sort_key(dir_name: &str) -> (u8, String) {
    let lower = dir_name.to_ascii_lowercase();
    let rank = if lower.contains("libraries") {
        0
    } else if lower.contains("keywords") {
        1
    } else {
        2
    };
    (rank, dir_name.to_string())
}

/// Write the HTML page for one keyword file. Returns the page path.
///
/// # Errors
///
/// Returns an I/O error when the page cannot be written.
pub fn write_file_page(config: &DocgenConfig, file: &KeywordFile) -> AprobarResult<PathBuf> {
    let page_path = config
        .output_dir
        .join(file.relative.with_extension("html"));
    if let Some(parent) = page_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&page_path, render_file_page(file))?;
    debug!("Documentation generated: {}", page_path.display());
    Ok(page_path)
}

/// Write the index page linking every generated file page. Returns the
/// index path.
///
/// # Errors
///
/// Returns an I/O error when the index cannot be written.
pub fn write_index(config: &DocgenConfig, files: &[KeywordFile]) -> AprobarResult<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)?;
    let index_path = config.output_dir.join("index.html");
    std::fs::write(&index_path, render_index(config, files))?;
    info!("Index file created: {}", index_path.display());
    Ok(index_path)
}

fn render_file_page(file: &KeywordFile) -> String {
    let title = file
        .relative
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut body = String::new();
    if file.keywords.is_empty() {
        body += "        <p>No keywords defined in this file.</p>\n";
    }
    for keyword in &file.keywords {
        body += &format!("        <h2>{}</h2>\n", escape_html(&keyword.name));
        if !keyword.doc.is_empty() {
            body += &format!(
                "        <p>{}</p>\n",
                escape_html(&keyword.doc.join(" "))
            );
        }
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         {STYLE}\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         \x20       <h1>{title} <span class=\"file-type\">({kind})</span></h1>\n\
         {body}\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape_html(&title),
        kind = file.kind.label(),
    )
}

fn render_index(config: &DocgenConfig, files: &[KeywordFile]) -> String {
    // Group files by their parent directory relative to the resources root.
    let mut by_dir: HashMap<String, Vec<&KeywordFile>> = HashMap::new();
    for file in files {
        let dir = file
            .relative
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| ".".to_string(), |p| p.to_string_lossy().to_string());
        by_dir.entry(dir).or_default().push(file);
    }

    let mut dirs: Vec<String> = by_dir.keys().cloned().collect();
    dirs.sort_by_key(|dir| dir_sort_key(dir));

    let mut sections = String::new();
    for dir in dirs {
        let heading = if dir == "." {
            "Root Directory"
        } else {
            dir.as_str()
        };
        sections += &format!("        <h2>{}</h2>\n        <ul>\n", escape_html(heading));

        let mut entries = by_dir.remove(&dir).unwrap_or_default();
        entries.sort_by_key(|file| file.relative.file_name().map(std::ffi::OsStr::to_os_string));
        for file in entries {
            let href = file
                .relative
                .with_extension("html")
                .to_string_lossy()
                .replace('\\', "/");
            let name = file
                .relative
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            sections += &format!(
                "            <li><a href=\"{href}\">{}</a> <span class=\"file-type\">({})</span></li>\n",
                escape_html(&name),
                file.kind.label(),
            );
        }
        sections += "        </ul>\n";
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{project} Documentation</title>\n\
         {STYLE}\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         \x20       <h1>{project} Documentation</h1>\n\
         \x20       <p>Documentation generated for {project} resources and keyword files.</p>\n\
         {sections}\
         </div>\n\
         </body>\n\
         </html>\n",
        project = escape_html(&config.project_name),
    )
}

const STYLE: &str = "<style>\n\
    body { font-family: Arial, sans-serif; margin: 0; padding: 20px; line-height: 1.6; }\n\
    h1 { color: #0056b3; border-bottom: 1px solid #eee; padding-bottom: 10px; }\n\
    h2 { color: #0056b3; margin-top: 30px; }\n\
    .container { max-width: 1200px; margin: 0 auto; }\n\
    ul { padding-left: 20px; }\n\
    li { margin-bottom: 8px; }\n\
    a { color: #0056b3; text-decoration: none; }\n\
    a:hover { text-decoration: underline; }\n\
    .file-type { color: #666; font-size: 0.9em; }\n\
</style>\n";

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_RESOURCE: &str = "\
*** Settings ***
Library    Browser

*** Keywords ***
Open Application
    [Documentation]    Opens the application in the configured browser
    ...    and waits for the landing page.
    Log    opening

Close Application
    Log    closing
";

    #[test]
    fn test_parse_keywords_names_and_docs() {
        let keywords = parse_keywords(SAMPLE_RESOURCE);

        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].name, "Open Application");
        assert_eq!(
            keywords[0].doc,
            vec![
                "Opens the application in the configured browser",
                "and waits for the landing page."
            ]
        );
        assert_eq!(keywords[1].name, "Close Application");
        assert!(keywords[1].doc.is_empty());
    }

    #[test]
    fn test_parse_keywords_ignores_other_sections() {
        let contents = "*** Test Cases ***\nSome Test\n    Log    hi\n";
        assert!(parse_keywords(contents).is_empty());
    }

    #[test]
    fn test_parse_keywords_empty_input() {
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn test_dir_sort_key_orders_groups() {
        let mut dirs = vec![
            "pages".to_string(),
            "keywords".to_string(),
            "libraries".to_string(),
            "data".to_string(),
        ];
        dirs.sort_by_key(|d| dir_sort_key(d));
        assert_eq!(dirs, vec!["libraries", "keywords", "data", "pages"]);
    }

    fn sample_tree(temp: &TempDir) -> DocgenConfig {
        let resources = temp.path().join("resources");
        std::fs::create_dir_all(resources.join("keywords")).unwrap();
        std::fs::create_dir_all(resources.join("libraries")).unwrap();
        std::fs::create_dir_all(resources.join(".hidden")).unwrap();

        std::fs::write(resources.join("main.robot"), SAMPLE_RESOURCE).unwrap();
        std::fs::write(
            resources.join("keywords").join("login.resource"),
            SAMPLE_RESOURCE,
        )
        .unwrap();
        std::fs::write(
            resources.join("libraries").join("tables.resource"),
            SAMPLE_RESOURCE,
        )
        .unwrap();
        std::fs::write(
            resources.join(".hidden").join("secret.resource"),
            SAMPLE_RESOURCE,
        )
        .unwrap();
        std::fs::write(resources.join("notes.txt"), "not documentable").unwrap();
        std::fs::write(resources.join("excluded.resource"), SAMPLE_RESOURCE).unwrap();

        DocgenConfig::new(resources, temp.path().join("documentation"))
            .with_excluded(vec!["excluded.resource".to_string()])
            .with_project_name("Sample Suite")
    }

    #[test]
    fn test_scan_skips_hidden_excluded_and_foreign_files() {
        let temp = TempDir::new().unwrap();
        let config = sample_tree(&temp);

        let files = scan_keyword_files(&config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.relative.to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(
            names,
            vec![
                "keywords/login.resource",
                "libraries/tables.resource",
                "main.robot"
            ]
        );
    }

    #[test]
    fn test_scan_missing_resources_dir() {
        let temp = TempDir::new().unwrap();
        let config = DocgenConfig::new(temp.path().join("absent"), temp.path().join("out"));
        let result = scan_keyword_files(&config);
        assert!(matches!(result, Err(AprobarError::DocGeneration { .. })));
    }

    #[test]
    fn test_write_file_page_mirrors_tree() {
        let temp = TempDir::new().unwrap();
        let config = sample_tree(&temp);
        let files = scan_keyword_files(&config).unwrap();

        let page = write_file_page(&config, &files[0]).unwrap();

        assert!(page.ends_with(Path::new("keywords/login.html")));
        let html = std::fs::read_to_string(&page).unwrap();
        assert!(html.contains("<h2>Open Application</h2>"));
        assert!(html.contains("Opens the application in the configured browser"));
        assert!(html.contains("(Resource)"));
    }

    #[test]
    fn test_write_index_groups_and_orders() {
        let temp = TempDir::new().unwrap();
        let config = sample_tree(&temp);
        let files = scan_keyword_files(&config).unwrap();

        let index = write_index(&config, &files).unwrap();
        let html = std::fs::read_to_string(&index).unwrap();

        assert!(html.contains("Sample Suite Documentation"));
        let libraries = html.find("<h2>libraries</h2>").unwrap();
        let keywords = html.find("<h2>keywords</h2>").unwrap();
        let root = html.find("<h2>Root Directory</h2>").unwrap();
        assert!(libraries < keywords);
        assert!(keywords < root);
        assert!(html.contains("href=\"keywords/login.html\""));
        assert!(html.contains("(Robot)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
