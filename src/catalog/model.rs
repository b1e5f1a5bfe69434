use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameter mapping of a resource, in the order the compiler emitted it.
pub type Parameters = Map<String, Value>;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
/// The resource list of a compiled catalog.
pub struct Catalog {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
/// One declared resource: `Type[title]` plus its parameters.
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub parameters: Parameters,
}

impl Resource {
    pub fn new(kind: impl Into<String>, title: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            parameters,
        }
    }

    pub fn is_type(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// `Type[title]`, the way Puppet prints resource references.
    pub fn reference(&self) -> String {
        format!("{}[{}]", self.kind, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parameters_default_to_empty() {
        let resource: Resource =
            serde_json::from_value(json!({"type": "Stage", "title": "main"})).unwrap();
        assert!(resource.parameters.is_empty());
        assert_eq!(resource.reference(), "Stage[main]");
    }

    #[test]
    fn parameter_order_follows_input() {
        let resource: Resource = serde_json::from_value(json!({
            "type": "File",
            "title": "/etc/motd",
            "parameters": {"owner": "root", "group": "root", "mode": "0644"}
        }))
        .unwrap();
        let keys: Vec<_> = resource.parameters.keys().map(String::as_str).collect();
        assert_eq!(keys, ["owner", "group", "mode"]);
    }
}
