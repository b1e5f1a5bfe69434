//! Catalog loading and v3 → v4 normalization.
//!
//! A v3 catalog keeps its resources under `data.resources`; v4 moved them to
//! the top level. We do not convert anything else (edges, classes, tags) since
//! the generator only reads the resource list.

use crate::catalog::Catalog;
use crate::schema_loader::CatalogSchema;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog does not match the expected shape:\n{}", .0.join("\n"))]
    Shape(Vec<String>),
    #[error("catalog schema unavailable: {0:#}")]
    SchemaCompile(anyhow::Error),
}

/// Lift `data.resources` to the top level and drop `data`.
///
/// Leaves documents without a `data` key untouched, so calling it twice is
/// the same as calling it once.
pub fn normalize_legacy(document: &mut Value) {
    let Some(object) = document.as_object_mut() else {
        return;
    };
    let Some(data) = object.remove("data") else {
        return;
    };
    debug!("unwrapping v3 catalog envelope");
    let resources = data.get("resources").cloned().unwrap_or(Value::Null);
    object.insert("resources".to_string(), resources);
}

/// Parse catalog JSON text, normalizing legacy documents first.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let mut document: Value = serde_json::from_str(text)?;
    normalize_legacy(&mut document);

    let schema = CatalogSchema::load().map_err(CatalogError::SchemaCompile)?;
    let violations = schema.violations(&document);
    if !violations.is_empty() {
        return Err(CatalogError::Shape(violations));
    }

    let catalog: Catalog = serde_json::from_value(document)?;
    debug!(resources = catalog.resources.len(), "catalog parsed");
    Ok(catalog)
}

pub fn load_catalog_from_path(path: &Path) -> anyhow::Result<Catalog> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&text).with_context(|| format!("loading catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_is_noop_without_envelope() {
        let original = json!({"resources": [{"type": "Class", "title": "main"}], "version": 1});
        let mut document = original.clone();
        normalize_legacy(&mut document);
        assert_eq!(document, original);
    }

    #[test]
    fn normalize_lifts_v3_resources() {
        let inner = json!([{"type": "Package", "title": "ntp", "parameters": {}}]);
        let mut document = json!({
            "document_type": "Catalog",
            "resources": [],
            "data": {"name": "node", "resources": inner.clone()}
        });
        normalize_legacy(&mut document);
        assert_eq!(document["resources"], inner);
        assert!(document.get("data").is_none());
        assert_eq!(document["document_type"], "Catalog");

        let once = document.clone();
        normalize_legacy(&mut document);
        assert_eq!(document, once);
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse_catalog("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn parse_rejects_missing_resources() {
        let err = parse_catalog(r#"{"name": "node"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Shape(_)), "{err}");
    }

    #[test]
    fn parse_reads_v3_catalog() {
        let text = r#"{"data": {"resources": [
            {"type": "Service", "title": "ntpd", "parameters": {"ensure": "running"}}
        ]}}"#;
        let catalog = parse_catalog(text).unwrap();
        assert_eq!(catalog.resources.len(), 1);
        assert_eq!(catalog.resources[0].kind, "Service");
        assert_eq!(catalog.resources[0].parameters["ensure"], "running");
    }
}
