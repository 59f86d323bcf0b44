//! `key = value` line variable engine

use serde_json::Value;

use crate::bindings::Bindings;
use crate::engine::{EngineError, VariableEngine};

/// Parses one `key = value` pair per line. All values are strings.
pub struct KeyValueEngine;

impl VariableEngine for KeyValueEngine {
    fn name(&self) -> &'static str {
        "keyval"
    }

    fn parse(&self, text: &str) -> Result<Bindings, EngineError> {
        let mut bindings = Bindings::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                EngineError::new(format!("expected 'key = value', got '{line}'"))
            })?;
            bindings.insert(key.trim(), Value::String(value.trim().to_string()));
        }
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_pairs() {
        let bindings = KeyValueEngine.parse("a = 1\nb = two words\n").unwrap();
        assert_eq!(bindings["a"], json!("1"));
        assert_eq!(bindings["b"], json!("two words"));
    }

    #[test]
    fn trims_keys_and_values() {
        let bindings = KeyValueEngine.parse("  a   =   spaced  ").unwrap();
        assert_eq!(bindings["a"], json!("spaced"));
    }

    #[test]
    fn value_may_contain_equals() {
        // Only the first '=' separates key from value.
        let bindings = KeyValueEngine.parse("eq = a=b").unwrap();
        assert_eq!(bindings["eq"], json!("a=b"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let bindings = KeyValueEngine.parse("a = 1\n\nb = 2").unwrap();
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn line_without_equals_is_an_error() {
        let err = KeyValueEngine.parse("not a pair").unwrap_err();
        assert!(err.to_string().contains("not a pair"));
    }
}
