//! Generation options and the YAML config file that seeds them.
//!
//! Older config files were written for a Ruby loader and use symbol keys
//! (`:excludes:`); both spellings are accepted.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Resource types (or `/regex/` patterns over types) to leave out.
    pub excludes: Vec<String>,
    /// `Type[Title]` references; when non-empty only these are emitted and
    /// `excludes` is ignored.
    pub only_include: Vec<String>,
    /// Check file content by md5 digest instead of line by line.
    pub md5sums: bool,
    /// Fail instead of skipping a file whose content cannot be escaped.
    pub strict_content: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(alias = ":excludes")]
    excludes: Option<Vec<String>>,
    #[serde(alias = ":only_include")]
    only_include: Option<Vec<String>>,
    #[serde(alias = ":md5sums")]
    md5sums: Option<bool>,
    #[serde(alias = ":strict_content")]
    strict_content: Option<bool>,
}

impl Options {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as unit; treat it as "no overrides".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: ConfigFile = serde_yaml::from_str(text).context("parsing config YAML")?;
        Ok(Self {
            excludes: file.excludes.unwrap_or_default(),
            only_include: file.only_include.unwrap_or_default(),
            md5sums: file.md5sums.unwrap_or(false),
            strict_content: file.strict_content.unwrap_or(false),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("loading config {}", path.display()))
    }

    /// Load `path` if given, else the default config next to the executable.
    ///
    /// Only an explicitly named file is required to exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(candidate) if candidate.is_file() => Self::load(&candidate),
            Some(candidate) => {
                debug!(path = %candidate.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn exclude(&mut self, entry: &str) {
        if !self.excludes.iter().any(|existing| existing == entry) {
            self.excludes.push(entry.to_string());
        }
    }

    /// Take `entry` back out of the exclude list.
    pub fn include(&mut self, entry: &str) {
        self.excludes.retain(|existing| existing != entry);
    }

    pub fn only_include(&mut self, reference: &str) {
        self.only_include.push(reference.to_string());
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILE))
}
