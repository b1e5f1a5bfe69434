//! The load → resolve → filter → emit pipeline.

use crate::catalog::Catalog;
use crate::class_resolver::{MainSuccessor, RootClass, RootClassResolver};
use crate::emitter::{EscapeRules, SpecEmitter};
use crate::filter::ResourceFilter;
use crate::options::Options;
use anyhow::Result;

pub struct SpecGenerator {
    options: Options,
    resolver: Box<dyn RootClassResolver>,
    escapes: EscapeRules,
}

impl SpecGenerator {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            resolver: Box::new(MainSuccessor),
            escapes: EscapeRules::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: impl RootClassResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_escapes(mut self, escapes: EscapeRules) -> Self {
        self.escapes = escapes;
        self
    }

    /// Render the spec for `catalog`.
    ///
    /// The class is resolved before filtering, so excluding `Class`
    /// resources still leaves the `describe` header and params intact.
    pub fn generate(&self, mut catalog: Catalog) -> Result<String> {
        let root = RootClass::resolve(self.resolver.as_ref(), &catalog.resources);
        let filter = ResourceFilter::from_options(&self.options)?;
        filter.apply(&mut catalog.resources);
        SpecEmitter::new(&self.options, &self.escapes, &root).emit(&catalog.resources)
    }
}
