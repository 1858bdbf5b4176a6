//! Docs command handler: keyword documentation generation.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::ProgressReporter;
use crate::DocsArgs;
use aprobar::docgen::{scan_keyword_files, write_file_page, write_index, DocgenConfig};

/// Execute the docs command
pub fn execute_docs(config: &CliConfig, args: &DocsArgs) -> CliResult<()> {
    let mut reporter =
        ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let project_name = args
        .project_name
        .clone()
        .unwrap_or_else(default_project_name);

    let docgen_config = DocgenConfig::new(&args.resources, &args.output)
        .with_excluded(args.exclude.clone())
        .with_project_name(project_name);

    let files = scan_keyword_files(&docgen_config)?;
    if files.is_empty() {
        reporter.warning(&format!(
            "No keyword files found under {}",
            args.resources.display()
        ));
    }

    reporter.start_progress(files.len() as u64, "Generating documentation");
    for file in &files {
        write_file_page(&docgen_config, file)?;
        reporter.increment(1);
    }
    reporter.finish();

    let index = write_index(&docgen_config, &files)?;
    reporter.success(&format!(
        "Documentation for {} file(s) written to {}",
        files.len(),
        index.parent().unwrap_or(&args.output).display()
    ));
    Ok(())
}

/// Derive a project name from the current directory, title-cased with
/// underscores turned into spaces.
fn default_project_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| {
            dir.file_name()
                .map(|name| title_case(&name.to_string_lossy()))
        })
        .unwrap_or_else(|| "Test Automation".to_string())
}

fn title_case(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
