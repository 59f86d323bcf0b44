//! Literal `{{ name }}` substitution template engine
//!
//! Replaces each `{{ name }}` placeholder with the named binding's scalar
//! text. No expressions, no function calls, no escaping; placeholders with
//! no matching binding pass through verbatim.

use serde_json::Value;

use crate::bindings::Bindings;
use crate::context::FunctionTable;
use crate::engine::{EngineError, Renderable, TemplateEngine};

pub struct LiteralEngine;

impl TemplateEngine for LiteralEngine {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn compile(&self, text: &str) -> Result<Box<dyn Renderable>, EngineError> {
        Ok(Box::new(LiteralTemplate {
            text: text.to_string(),
        }))
    }
}

struct LiteralTemplate {
    text: String,
}

impl Renderable for LiteralTemplate {
    fn render(
        &self,
        bindings: &Bindings,
        _functions: &FunctionTable,
    ) -> Result<String, EngineError> {
        let mut output = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(close) => {
                    let key = after[..close].trim();
                    match bindings.get(key) {
                        Some(value) => output.push_str(&scalar_text(value)),
                        // Unknown placeholder: keep it verbatim.
                        None => output.push_str(&rest[start..start + 2 + close + 2]),
                    }
                    rest = &after[close + 2..];
                }
                None => {
                    // Unclosed braces are plain text.
                    output.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        output.push_str(rest);
        Ok(output)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
