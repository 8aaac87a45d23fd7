use std::path::Path;

use anyhow::Result;

use crate::discovery::DiscoveryConfig;
use crate::linting::{load_project, parse_file, run_lint, LintOptions};
use crate::resolver::{resolve_type, ResolutionContext};

use super::output::{format_lint_result, format_resolution};
use super::OutputFormat;

/// Run `doclint check`. Returns the formatted output and whether any
/// diagnostic was reported.
pub fn run_check(
    project_path: &Path,
    options: &LintOptions,
    format: &OutputFormat,
) -> Result<(String, bool)> {
    let result = run_lint(project_path, options)?;
    let has_diagnostics = !result.diagnostics.is_empty();
    if !result.parse_errors.is_empty() {
        eprintln!("Parse errors:");
        for err in &result.parse_errors {
            eprintln!("  {}", err);
        }
    }
    Ok((format_lint_result(&result, format), has_diagnostics))
}

/// Run `doclint resolve`. Returns the formatted output and whether the
/// name resolved.
///
/// The name is resolved in the context of `file`'s package, imports and
/// first top-level type, against the symbol table of `project_path`.
pub fn run_resolve(
    project_path: &Path,
    file: &Path,
    name: &str,
    discovery: &DiscoveryConfig,
    format: &OutputFormat,
) -> Result<(String, bool)> {
    let project = load_project(project_path, discovery)?;
    let unit = parse_file(file)?;

    let outer_type = unit
        .types
        .first()
        .map(|t| t.binary_name.as_str())
        .unwrap_or_default();
    let context = ResolutionContext::for_unit(&unit, outer_type);
    let resolved = resolve_type(name, &context, &project.table);

    Ok((
        format_resolution(name, resolved.as_ref(), format),
        resolved.is_some(),
    ))
}
