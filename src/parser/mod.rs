use anyhow::Result;
use std::path::Path;

use crate::model::ParsedUnit;

pub mod java;

/// Trait for source extractors.
///
/// An implementation walks a tree-sitter CST and produces the package,
/// imports, type declarations and documented declarations of one file.
pub trait LanguageParser: Send + Sync {
    /// Parse a source file into a unit.
    fn parse(&self, source: &str, path: &Path) -> Result<ParsedUnit>;
}
