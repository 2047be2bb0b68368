//! Package metadata document as served by an npm-compatible registry

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw metadata object for one package.
///
/// Only `dist-tags` is interpreted; every other key is kept as-is so that
/// requested tags can be looked up at the top level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PackageMetadata(Map<String, Value>);

impl PackageMetadata {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns true if `tag` is a top-level key holding a truthy value.
    ///
    /// `null`, `false`, `0` and `""` count as absent.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.0.get(tag).is_some_and(is_truthy)
    }

    /// Looks up `name` inside the `dist-tags` mapping.
    pub fn dist_tag(&self, name: &str) -> Option<&str> {
        self.0
            .get("dist-tags")
            .and_then(Value::as_object)
            .and_then(|tags| tags.get(name))
            .and_then(Value::as_str)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
