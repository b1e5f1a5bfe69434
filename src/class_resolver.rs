//! Working out which class a catalog was compiled for.
//!
//! A compiled catalog does not record its compilation target. The default
//! strategy leans on the compiler's emission order: the target class is the
//! first `Class` resource after the synthetic `Class[main]`. Other orders are
//! possible, so the heuristic sits behind [`RootClassResolver`] and callers
//! can supply the name outright with [`ExplicitClass`].

use crate::catalog::{CLASS_TYPE, Parameters, Resource};
use tracing::{debug, warn};

pub trait RootClassResolver {
    /// Lower-cased class name, or `None` when it cannot be determined.
    fn resolve(&self, resources: &[Resource]) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MainSuccessor;

impl RootClassResolver for MainSuccessor {
    fn resolve(&self, resources: &[Resource]) -> Option<String> {
        let mut main_found = false;
        for resource in resources.iter().filter(|r| r.is_type(CLASS_TYPE)) {
            if resource.title == "main" {
                main_found = true;
                continue;
            }
            if main_found {
                return Some(resource.title.to_lowercase());
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct ExplicitClass(pub String);

impl RootClassResolver for ExplicitClass {
    fn resolve(&self, _resources: &[Resource]) -> Option<String> {
        Some(self.0.to_lowercase())
    }
}

/// `foo::bar_baz` → `Foo::Bar_baz`, matching how catalogs title classes.
pub fn capitalize_class_name(name: &str) -> String {
    name.split("::")
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join("::")
}

fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Parameters of the `Class` resource matching `class_name`.
pub fn resolve_class_params<'a>(
    resources: &'a [Resource],
    class_name: &str,
) -> Option<&'a Parameters> {
    let title = capitalize_class_name(class_name);
    resources
        .iter()
        .find(|r| r.is_type(CLASS_TYPE) && r.title == title)
        .map(|r| &r.parameters)
}

#[derive(Debug, Clone, Default)]
/// Outcome of class resolution, with each step optional.
pub struct RootClass {
    pub name: Option<String>,
    pub params: Option<Parameters>,
}

impl RootClass {
    pub fn resolve(resolver: &dyn RootClassResolver, resources: &[Resource]) -> Self {
        let Some(name) = resolver.resolve(resources) else {
            warn!("could not infer the compiled class; class name will be blank");
            return Self::default();
        };
        let params = resolve_class_params(resources, &name).cloned();
        if params.is_none() {
            warn!(class = %name, "no Class resource titled {}; omitting params", capitalize_class_name(&name));
        }
        debug!(class = %name, "resolved root class");
        Self {
            name: Some(name),
            params,
        }
    }

    pub fn name_or_blank(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn class(title: &str, params: serde_json::Value) -> Resource {
        let parameters = params.as_object().cloned().unwrap_or_default();
        Resource::new(CLASS_TYPE, title, parameters)
    }

    fn resource(kind: &str, title: &str) -> Resource {
        Resource::new(kind, title, Parameters::new())
    }

    #[test]
    fn picks_class_after_main() {
        let resources = vec![
            class("Settings", json!({})),
            class("main", json!({})),
            resource("Stage", "main"),
            class("Ntp::Config", json!({})),
            class("Ntp", json!({})),
        ];
        assert_eq!(MainSuccessor.resolve(&resources).as_deref(), Some("ntp::config"));
    }

    #[test]
    fn no_marker_means_no_class() {
        let resources = vec![class("Ntp", json!({})), class("Other", json!({}))];
        assert_eq!(MainSuccessor.resolve(&resources), None);
    }

    #[test]
    fn marker_without_successor_means_no_class() {
        let resources = vec![class("main", json!({})), resource("Package", "ntp")];
        assert_eq!(MainSuccessor.resolve(&resources), None);
    }

    #[test]
    fn explicit_class_ignores_catalog() {
        assert_eq!(ExplicitClass("Role::Web".into()).resolve(&[]).as_deref(), Some("role::web"));
    }

    #[test]
    fn capitalizes_each_segment() {
        assert_eq!(capitalize_class_name("foo::bar"), "Foo::Bar");
        assert_eq!(capitalize_class_name("profile::base_os"), "Profile::Base_os");
        assert_eq!(capitalize_class_name("ntp"), "Ntp");
        assert_eq!(capitalize_class_name(""), "");
    }

    #[test]
    fn finds_params_of_capitalized_title() {
        let resources = vec![
            class("main", json!({"name": "main"})),
            class("Foo::Bar", json!({"x": 1})),
        ];
        let params = resolve_class_params(&resources, "foo::bar").unwrap();
        assert_eq!(params["x"], 1);
        assert!(resolve_class_params(&resources, "foo::baz").is_none());
    }

    #[test]
    fn root_class_degrades_to_blank() {
        let root = RootClass::resolve(&MainSuccessor, &[resource("Package", "ntp")]);
        assert_eq!(root.name_or_blank(), "");
        assert!(root.params.is_none());
    }
}
