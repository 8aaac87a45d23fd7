//! Project-wide doc comment linting: discovery, parsing, symbol table
//! construction and parallel per-declaration checks.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{build_symbol_table, erased_parameters, SymbolTable};
use crate::checker::{check_declaration, CheckerConfig, Violation};
use crate::discovery::{discover_files, DiscoveryConfig};
use crate::model::{DeclKind, Declaration, Diagnostic, DiagnosticKind, ParsedUnit};
use crate::parser::java::JavaParser;
use crate::parser::LanguageParser;
use crate::resolver::reference::overrides_method;
use crate::resolver::{ResolutionContext, TypeRef};

pub mod config;
pub mod matcher;

use config::{load_project_config, FileSettings, SettingsPatch};
use matcher::to_relative;

/// Options for one lint run.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    pub discovery: DiscoveryConfig,
    /// Explicit config file, instead of searching the project root.
    pub config_path: Option<PathBuf>,
    /// Settings from the command line, applied over the config file.
    pub settings: SettingsPatch,
}

/// A diagnostic located in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiagnostic {
    /// Project-relative path.
    pub path: PathBuf,
    /// 1-based source line.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
    /// Qualified name of the documented declaration.
    pub declaration: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintResult {
    pub files_checked: usize,
    pub diagnostics: Vec<FileDiagnostic>,
    pub parse_errors: Vec<String>,
    pub duration_ms: u64,
}

/// Parsed sources of a project plus the symbol table built from them.
pub struct Project {
    pub root: PathBuf,
    pub units: Vec<ParsedUnit>,
    pub table: SymbolTable,
    pub parse_errors: Vec<String>,
}

/// Read and parse one source file.
pub fn parse_file(path: &Path) -> Result<ParsedUnit> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    JavaParser::new()
        .parse(&source, path)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Discover and parse every source file under `root`. Files that cannot be
/// read or parsed are recorded in `parse_errors` and skipped.
pub fn load_project(root: &Path, discovery: &DiscoveryConfig) -> Result<Project> {
    let files = discover_files(root, discovery)?;

    let results: Vec<Result<ParsedUnit>> = files.par_iter().map(|path| parse_file(path)).collect();

    let mut units = Vec::with_capacity(results.len());
    let mut parse_errors = Vec::new();
    for result in results {
        match result {
            Ok(unit) => units.push(unit),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "skipping file");
                parse_errors.push(format!("{:#}", e));
            }
        }
    }

    let table = build_symbol_table(&units);
    Ok(Project {
        root: root.to_path_buf(),
        units,
        table,
        parse_errors,
    })
}

/// Qualified, dotted name of a declaration: `a.b.Outer.Inner.method`.
fn qualified_name(declaration: &Declaration) -> String {
    let owner = declaration.owner.replace('$', ".");
    if declaration.kind.is_type() {
        owner
    } else if owner.is_empty() {
        declaration.name.clone()
    } else {
        format!("{}.{}", owner, declaration.name)
    }
}

/// Whether a supertype in `table` declares this method's signature.
fn overrides_supertype(unit: &ParsedUnit, declaration: &Declaration, table: &SymbolTable) -> bool {
    let params = erased_parameters(unit, declaration, table);
    overrides_method(
        table,
        &TypeRef::new(declaration.owner.as_str()),
        &declaration.name,
        &params,
    )
}

/// Check every declaration of `unit` with the settings for its path.
pub fn check_unit(
    unit: &ParsedUnit,
    relative_path: &Path,
    table: &SymbolTable,
    config: &CheckerConfig,
) -> Vec<FileDiagnostic> {
    let mut found = Vec::new();

    for declaration in &unit.declarations {
        let is_method = declaration.kind == DeclKind::Method;
        let table_override = is_method && overrides_supertype(unit, declaration, table);
        let has_annotation = declaration.has_annotation("Override");

        if config.require_override_annotation && table_override && !has_annotation {
            let violation = Violation::MissingOverride {
                name: declaration.name.clone(),
            };
            found.push(FileDiagnostic {
                path: relative_path.to_path_buf(),
                line: declaration.line,
                kind: violation.kind(),
                message: violation.to_string(),
                declaration: qualified_name(declaration),
            });
        }

        let Some(comment) = &declaration.comment else {
            continue;
        };

        let context = ResolutionContext::for_unit(unit, &declaration.outer_type);
        let is_override = is_method && (table_override || has_annotation);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        check_declaration(declaration, &context, table, config, is_override, &mut diagnostics);

        found.extend(diagnostics.into_iter().map(|d| FileDiagnostic {
            path: relative_path.to_path_buf(),
            line: comment.line + d.line,
            kind: d.kind,
            message: d.message,
            declaration: qualified_name(declaration),
        }));
    }

    found
}

/// Lint every source file under `root`.
pub fn run_lint(root: &Path, options: &LintOptions) -> Result<LintResult> {
    let start = Instant::now();

    let config = load_project_config(root, options.config_path.as_deref())?;
    let settings = FileSettings::new(&config, options.settings.clone())?;
    let project = load_project(root, &options.discovery)?;

    let mut diagnostics: Vec<FileDiagnostic> = project
        .units
        .par_iter()
        .flat_map_iter(|unit| {
            let relative = to_relative(&unit.path, root);
            let config = settings.for_path(relative);
            check_unit(unit, relative, &project.table, &config)
        })
        .collect();
    diagnostics.sort_by(|a, b| a.path.cmp(&b.path).then(a.line.cmp(&b.line)));

    let result = LintResult {
        files_checked: project.units.len(),
        diagnostics,
        parse_errors: project.parse_errors,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        files = result.files_checked,
        diagnostics = result.diagnostics.len(),
        duration_ms = result.duration_ms,
        "lint finished"
    );
    Ok(result)
}
