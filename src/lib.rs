//! Generate rspec-puppet specs from compiled Puppet catalogs.
//!
//! The crate reads a catalog (v3 or v4 JSON), picks the resources worth
//! asserting, works out which class the catalog was compiled for, and emits a
//! spec that checks every resource, its parameters and any inline file
//! content. The `create-specs` binary wires this to the command line.

pub mod catalog;
pub mod class_resolver;
pub mod emitter;
pub mod filter;
pub mod generator;
pub mod options;
pub mod writer;

mod schema_loader;

pub use catalog::{
    Catalog, CatalogError, Parameters, Resource, load_catalog_from_path, normalize_legacy,
    parse_catalog,
};
pub use class_resolver::{
    ExplicitClass, MainSuccessor, RootClass, RootClassResolver, capitalize_class_name,
    resolve_class_params,
};
pub use emitter::{EscapeRule, EscapeRules, SpecEmitter, matcher};
pub use filter::{ExcludeRule, ResourceFilter, ResourceRef};
pub use generator::SpecGenerator;
pub use options::Options;
pub use writer::{DEFAULT_OUTPUT, write_spec};
