//! Compiled catalog wiring.
//!
//! This module reads the JSON catalogs that `puppet catalog compile` (or
//! rspec-puppet's own catalogue dump) writes to disk. Two historical layouts
//! exist: v3 wraps everything in a `data` envelope, v4 exposes `resources` at
//! the top level. Loading always yields the v4 shape; callers never need to
//! care which one they were handed.

pub mod loader;
pub mod model;

pub use loader::{CatalogError, load_catalog_from_path, normalize_legacy, parse_catalog};
pub use model::{Catalog, Parameters, Resource};

/// Resource type of class declarations.
pub const CLASS_TYPE: &str = "Class";

/// Resource type of managed files.
pub const FILE_TYPE: &str = "File";
