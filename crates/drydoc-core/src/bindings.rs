//! Name-to-value bindings available to a template at render time

use std::ops::Index;

use serde_json::{Map, Value};

use crate::error::{DrydocError, Result};

/// The bindings a template is rendered against.
///
/// A thin view over a JSON object map: names are unique, last write wins.
/// Lookup is available both through [`Bindings::get`] and through indexing
/// (`bindings["name"]`); both read the same underlying map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    map: Map<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.map.iter()
    }

    /// Merge `other` into `self`; `other` wins on name collisions.
    pub fn merge(&mut self, other: &Bindings) {
        for (name, value) in other.iter() {
            self.map.insert(name.clone(), value.clone());
        }
    }

    /// Build bindings from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(DrydocError::BindingType(format!(
                "expected a mapping, got {}",
                value_kind(&other)
            ))),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.map.clone())
    }
}

impl From<Map<String, Value>> for Bindings {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl FromIterator<(String, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Index<&str> for Bindings {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name)
            .unwrap_or_else(|| panic!("no binding named '{name}'"))
    }
}

/// Human-readable kind of a JSON value, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_write_wins() {
        let mut bindings = Bindings::new();
        bindings.insert("a", "first");
        bindings.insert("a", "second");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings["a"], json!("second"));
    }

    #[test]
    fn index_and_get_agree() {
        let mut bindings = Bindings::new();
        bindings.insert("key", 7);
        assert_eq!(bindings.get("key"), Some(&bindings["key"]));
    }

    #[test]
    fn merge_prefers_other() {
        let mut base = Bindings::new();
        base.insert("a", "base");
        base.insert("b", "base");
        let mut extra = Bindings::new();
        extra.insert("a", "extra");
        base.merge(&extra);
        assert_eq!(base["a"], json!("extra"));
        assert_eq!(base["b"], json!("base"));
    }

    #[test]
    fn from_value_rejects_non_mappings() {
        let err = Bindings::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("BINDING_TYPE"));
        assert!(err.to_string().contains("sequence"));
    }
}
