use std::path::Path;

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Matches project-relative paths against the `paths` globs of a config
/// override.
///
/// Patterns prefixed with `!` are exclusions. A path matches if it
/// matches any include pattern and no exclude pattern.
pub struct FileMatcher {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileMatcher {
    /// An empty pattern list matches nothing.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut include_builder = GlobSetBuilder::new();
        let mut exclude_builder = GlobSetBuilder::new();

        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(negated) => exclude_builder.add(Glob::new(negated)?),
                None => include_builder.add(Glob::new(pattern)?),
            };
        }

        Ok(Self {
            include: include_builder.build()?,
            exclude: exclude_builder.build()?,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// `path` relative to `project_root`, or `path` itself when it lies
/// outside the root.
pub fn to_relative<'a>(path: &'a Path, project_root: &Path) -> &'a Path {
    path.strip_prefix(project_root).unwrap_or(path)
}
