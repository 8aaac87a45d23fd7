use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::debug;

/// Extensions of files handed to the Java parser.
const SOURCE_EXTENSIONS: &[&str] = &["java"];

/// Configuration for file discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Glob patterns to include (empty means include all).
    pub include: Vec<String>,
    /// Glob patterns to exclude.
    pub exclude: Vec<String>,
}

/// Build output and IDE directories that never hold sources worth checking.
const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["target/", "build/", ".gradle/", ".idea/", "out/"];

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Discover Java source files under `root`, respecting .gitignore.
///
/// Results are sorted by path.
pub fn discover_files(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false) // let gitignore decide about dot-prefixed dirs
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .parents(true);

    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    for pattern in DEFAULT_EXCLUDE_PATTERNS {
        overrides
            .add(&format!("!{}", pattern))
            .context("invalid default exclude pattern")?;
    }
    for pattern in &config.exclude {
        overrides
            .add(&format!("!{}", pattern))
            .context("invalid exclude pattern")?;
    }
    for pattern in &config.include {
        overrides.add(pattern).context("invalid include pattern")?;
    }
    builder.overrides(overrides.build().context("failed to build overrides")?);

    for entry in builder.build() {
        let entry = entry.context("error reading directory entry")?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if !is_source_file(entry.path()) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }

    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered source files");
    Ok(files)
}
