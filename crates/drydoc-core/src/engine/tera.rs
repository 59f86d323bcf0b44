//! Tera template engine adapter
//!
//! Compiles the template section as a single raw Tera template and maps
//! the document's function table onto Tera functions, so templates can
//! call `include(path="...")` and friends with named arguments.

use std::collections::HashMap;

use tera::Tera;

use crate::bindings::Bindings;
use crate::context::FunctionTable;
use crate::engine::{EngineError, Renderable, TemplateEngine};

const TEMPLATE_NAME: &str = "document";

pub struct TeraEngine;

impl TemplateEngine for TeraEngine {
    fn name(&self) -> &'static str {
        "tera"
    }

    fn compile(&self, text: &str) -> Result<Box<dyn Renderable>, EngineError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, text)
            .map_err(|e| EngineError::new(error_chain(&e)))?;
        Ok(Box::new(TeraTemplate { tera }))
    }
}

struct TeraTemplate {
    tera: Tera,
}

impl Renderable for TeraTemplate {
    fn render(
        &self,
        bindings: &Bindings,
        functions: &FunctionTable,
    ) -> Result<String, EngineError> {
        // Functions are registered per render call; they close over the
        // caller's resolution context, which differs between invocations.
        let mut tera = self.tera.clone();
        for (name, func) in functions.iter() {
            let func = func.clone();
            tera.register_function(
                name,
                move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                    func(args).map_err(|e| tera::Error::msg(e.to_string()))
                },
            );
        }

        let mut context = tera::Context::new();
        for (name, value) in bindings.iter() {
            context.insert(name.as_str(), value);
        }

        tera.render(TEMPLATE_NAME, &context)
            .map_err(|e| EngineError::new(error_chain(&e)))
    }
}

/// Tera reports the interesting cause one level down; flatten the chain
/// into a single message.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
