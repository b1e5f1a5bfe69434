//! Resource selection: the exclude policy or the only-include allow-list.

use crate::catalog::Resource;
use crate::options::Options;
use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum ExcludeRule {
    /// Exact resource type, e.g. `Stage`.
    Type(String),
    /// `/pattern/` entry, searched (unanchored) against the type.
    Pattern(Regex),
}

impl ExcludeRule {
    pub fn parse(entry: &str) -> Result<Self> {
        if let Some(pattern) = delimited_pattern(entry) {
            let regex = Regex::new(pattern)
                .with_context(|| format!("invalid exclude pattern {entry}"))?;
            return Ok(ExcludeRule::Pattern(regex));
        }
        Ok(ExcludeRule::Type(entry.to_string()))
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        match self {
            ExcludeRule::Type(kind) => resource.kind == *kind,
            ExcludeRule::Pattern(regex) => regex.is_match(&resource.kind),
        }
    }
}

fn delimited_pattern(entry: &str) -> Option<&str> {
    entry
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A `Type[Title]` reference from the only-include list.
pub struct ResourceRef {
    pub kind: String,
    pub title: String,
}

impl ResourceRef {
    /// Accepts `Type[Title]`, or `Type Title` when there are no brackets.
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if let Some((kind, rest)) = reference.split_once('[') {
            let title = rest.strip_suffix(']')?.trim();
            let kind = kind.trim();
            if kind.is_empty() || title.is_empty() {
                return None;
            }
            return Some(Self {
                kind: kind.to_string(),
                title: title.to_string(),
            });
        }
        let mut parts = reference.split_whitespace();
        let kind = parts.next()?;
        let title = parts.next()?;
        Some(Self {
            kind: kind.to_string(),
            title: title.to_string(),
        })
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        resource.kind == self.kind && resource.title == self.title
    }
}

#[derive(Debug, Clone)]
pub enum ResourceFilter {
    Exclude(Vec<ExcludeRule>),
    OnlyInclude(Vec<ResourceRef>),
}

impl ResourceFilter {
    /// Build the active policy; a non-empty only-include list wins outright.
    pub fn from_options(options: &Options) -> Result<Self> {
        if !options.only_include.is_empty() {
            let refs = options
                .only_include
                .iter()
                .filter_map(|reference| {
                    let parsed = ResourceRef::parse(reference);
                    if parsed.is_none() {
                        debug!(reference = %reference, "ignoring malformed only-include reference");
                    }
                    parsed
                })
                .collect();
            return Ok(ResourceFilter::OnlyInclude(refs));
        }
        let rules = options
            .excludes
            .iter()
            .map(|entry| ExcludeRule::parse(entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(ResourceFilter::Exclude(rules))
    }

    pub fn keeps(&self, resource: &Resource) -> bool {
        match self {
            ResourceFilter::Exclude(rules) => !rules.iter().any(|rule| rule.matches(resource)),
            ResourceFilter::OnlyInclude(refs) => refs.iter().any(|r| r.matches(resource)),
        }
    }

    pub fn apply(&self, resources: &mut Vec<Resource>) {
        let before = resources.len();
        resources.retain(|resource| self.keeps(resource));
        debug!(kept = resources.len(), dropped = before - resources.len(), "filtered resources");
    }

    pub fn is_only_include(&self) -> bool {
        matches!(self, ResourceFilter::OnlyInclude(_))
    }
}
