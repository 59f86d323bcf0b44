//! YAML variable engine

use serde_json::Value;

use crate::bindings::{value_kind, Bindings};
use crate::engine::{EngineError, VariableEngine};

/// Parses the variable section as a YAML mapping.
pub struct YamlEngine;

impl VariableEngine for YamlEngine {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, text: &str) -> Result<Bindings, EngineError> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|e| EngineError::new(format!("invalid YAML: {e}")))?;
        match value {
            Value::Object(map) => Ok(Bindings::from(map)),
            other => Err(EngineError::new(format!(
                "variable section must be a mapping, got {}",
                value_kind(&other)
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_mapping() {
        let bindings = YamlEngine.parse("a: 汉语漢\nb: 1\n").unwrap();
        assert_eq!(bindings["a"], json!("汉语漢"));
        assert_eq!(bindings["b"], json!(1));
    }

    #[test]
    fn parses_structured_values() {
        let bindings = YamlEngine
            .parse("authors:\n  - ada\n  - grace\nmeta:\n  year: 2026\n")
            .unwrap();
        assert_eq!(bindings["authors"], json!(["ada", "grace"]));
        assert_eq!(bindings["meta"], json!({ "year": 2026 }));
    }

    #[test]
    fn rejects_non_mapping_documents() {
        let err = YamlEngine.parse("- just\n- a\n- list\n").unwrap_err();
        assert!(err.to_string().contains("must be a mapping"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = YamlEngine.parse("a: [unclosed\n").unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }
}
