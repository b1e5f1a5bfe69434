//! Embedded JSON Schema for compiled catalogs.
//!
//! The schema only describes the fields the generator reads (`resources`,
//! and `type`/`title`/`parameters` on each entry). Everything else a
//! compiler writes (`tags`, `file`, `line`, `edges`, ...) is allowed and
//! ignored.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;

const CATALOG_SCHEMA: &str = include_str!("../schema/catalog.schema.json");

/// Compiled validator for the normalized catalog shape.
pub(crate) struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    pub(crate) fn load() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(CATALOG_SCHEMA).context("parsing embedded catalog schema")?;
        let compiled = JSONSchema::compile(&raw)
            .map_err(|err| anyhow!("compiling embedded catalog schema: {err}"))?;
        Ok(Self { compiled })
    }

    /// Every violation as `<instance path>: <message>`, empty when valid.
    pub(crate) fn violations(&self, instance: &Value) -> Vec<String> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let path = err.instance_path.to_string();
                    if path.is_empty() {
                        err.to_string()
                    } else {
                        format!("{path}: {err}")
                    }
                })
                .collect(),
        }
    }
}
