use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::matcher::FileMatcher;
use crate::checker::CheckerConfig;

/// Top-level lint configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Project-wide checker settings.
    #[serde(default)]
    pub checker: CheckerConfig,
    /// Per-path adjustments, applied in order.
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

/// Checker settings that are only changed when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub minimum_comment_length: Option<usize>,
    #[serde(default)]
    pub check_references: Option<bool>,
    #[serde(default)]
    pub require_override_annotation: Option<bool>,
}

impl SettingsPatch {
    pub fn apply(&self, config: &mut CheckerConfig) {
        if let Some(length) = self.minimum_comment_length {
            config.minimum_comment_length = length;
        }
        if let Some(check) = self.check_references {
            config.check_references = check;
        }
        if let Some(require) = self.require_override_annotation {
            config.require_override_annotation = require;
        }
    }
}

/// Settings for files matching `paths`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverride {
    /// Glob patterns relative to the project root; `!` excludes.
    pub paths: Vec<String>,
    #[serde(flatten)]
    pub settings: SettingsPatch,
}

/// Default config file names, searched in order.
const CONFIG_FILENAMES: &[&str] = &[".doclint/config.toml", "doclint.toml"];

/// Find the config file for a project.
///
/// If `config_override` is provided, use that path directly.
/// Otherwise, search for config files in the project root.
pub fn find_config_path(project_root: &Path, config_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(override_path) = config_override {
        if override_path.exists() {
            return Some(override_path.to_path_buf());
        }
        return None;
    }

    for filename in CONFIG_FILENAMES {
        let path = project_root.join(filename);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Load and parse a lint config from a TOML file.
pub fn load_config(path: &Path) -> Result<LintConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse a lint config from a TOML string.
pub fn parse_config(toml_str: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Load the project's config. No config file means defaults; an explicit
/// path that does not exist is an error.
pub fn load_project_config(project_root: &Path, config_override: Option<&Path>) -> Result<LintConfig> {
    match find_config_path(project_root, config_override) {
        Some(path) => load_config(&path),
        None => {
            if let Some(path) = config_override {
                bail!("config file not found: {}", path.display());
            }
            Ok(LintConfig::default())
        }
    }
}

/// A config with its override globs compiled, answering "which settings
/// apply to this file".
pub struct FileSettings {
    base: CheckerConfig,
    overrides: Vec<(FileMatcher, SettingsPatch)>,
    /// Applied after every override (command-line flags).
    forced: SettingsPatch,
}

impl FileSettings {
    pub fn new(config: &LintConfig, forced: SettingsPatch) -> Result<Self> {
        let overrides = config
            .overrides
            .iter()
            .map(|o| {
                let matcher = FileMatcher::new(&o.paths)
                    .with_context(|| format!("invalid override paths {:?}", o.paths))?;
                Ok((matcher, o.settings.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            base: config.checker.clone(),
            overrides,
            forced,
        })
    }

    /// Settings for a project-relative path. Later overrides win.
    pub fn for_path(&self, relative: &Path) -> CheckerConfig {
        let mut config = self.base.clone();
        for (matcher, settings) in &self.overrides {
            if matcher.matches(relative) {
                settings.apply(&mut config);
            }
        }
        self.forced.apply(&mut config);
        config
    }
}
