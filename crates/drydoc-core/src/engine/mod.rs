//! Engine contracts and registry
//!
//! A variable engine parses the variable section into [`Bindings`]; a
//! template engine compiles the template section into a [`Renderable`].
//! The two are combined into named [`EnginePair`]s held by an
//! [`EngineRegistry`]. Engines signal recoverable input problems through
//! [`EngineError`]; the document model rewraps those with source context,
//! while anything else (a panic, say) propagates as the defect it is.

pub mod keyval;
pub mod literal;
#[cfg(feature = "yaml")]
pub mod tera;
#[cfg(feature = "yaml")]
pub mod yaml;

use std::sync::Arc;

use thiserror::Error;

use crate::bindings::Bindings;
use crate::context::FunctionTable;
use crate::error::{DrydocError, Result};

/// A recoverable parse or render failure declared by an engine.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parses a variable section into bindings.
pub trait VariableEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> std::result::Result<Bindings, EngineError>;
}

/// Compiles a template section into a renderable.
pub trait TemplateEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn compile(&self, text: &str) -> std::result::Result<Box<dyn Renderable>, EngineError>;
}

/// A compiled template, ready to render against bindings.
///
/// The function table carries the template functions in scope; engines
/// without call syntax (the literal engine) simply ignore it.
pub trait Renderable {
    fn render(
        &self,
        bindings: &Bindings,
        functions: &FunctionTable,
    ) -> std::result::Result<String, EngineError>;
}

/// A named (variable engine, template engine) combination.
///
/// Once a pair is selected for a document it never changes for that
/// document's lifetime; pairs are shared as `Arc<EnginePair>`.
pub struct EnginePair {
    name: String,
    variables: Box<dyn VariableEngine>,
    templates: Box<dyn TemplateEngine>,
}

impl std::fmt::Debug for EnginePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnginePair")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl EnginePair {
    pub fn new(
        name: impl Into<String>,
        variables: Box<dyn VariableEngine>,
        templates: Box<dyn TemplateEngine>,
    ) -> Self {
        Self {
            name: name.into(),
            variables,
            templates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parse_variables(&self, text: &str) -> std::result::Result<Bindings, EngineError> {
        self.variables.parse(text)
    }

    pub fn compile(&self, text: &str) -> std::result::Result<Box<dyn Renderable>, EngineError> {
        self.templates.compile(text)
    }
}

/// An explicit, constructible table of engine pairs.
///
/// Registration order is deterministic and queryable through
/// [`EngineRegistry::names`]; tests can build isolated registries instead
/// of depending on process-wide state.
#[derive(Default)]
pub struct EngineRegistry {
    engines: Vec<(String, Arc<EnginePair>)>,
    default: Option<String>,
}

impl EngineRegistry {
    /// An empty registry with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in pairs.
    ///
    /// The `simple` pair (key=value variables, literal substitution) is
    /// always present, so rendering degrades gracefully when the `yaml`
    /// feature is compiled out. With the feature enabled the `yaml` pair
    /// (YAML variables, Tera templates) is registered and becomes the
    /// default.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(EnginePair::new(
            "simple",
            Box::new(keyval::KeyValueEngine),
            Box::new(literal::LiteralEngine),
        ));
        #[cfg(feature = "yaml")]
        {
            registry.register(EnginePair::new(
                "yaml",
                Box::new(yaml::YamlEngine),
                Box::new(tera::TeraEngine),
            ));
            registry.default = Some("yaml".to_string());
        }
        registry
    }

    /// Register a pair under its name, replacing any previous registration.
    /// The first registered pair becomes the default.
    pub fn register(&mut self, pair: EnginePair) {
        let name = pair.name().to_string();
        self.engines.retain(|(n, _)| n != &name);
        if self.default.is_none() {
            self.default = Some(name.clone());
        }
        self.engines.push((name, Arc::new(pair)));
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<EnginePair>> {
        self.engines
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, pair)| pair.clone())
            .ok_or_else(|| DrydocError::EngineNotFound(name.to_string()))
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        self.resolve(name)?;
        self.default = Some(name.to_string());
        Ok(())
    }

    /// Name of the pair selected by default, if any pair is registered.
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn default_pair(&self) -> Result<Arc<EnginePair>> {
        match self.default_name() {
            Some(name) => self.resolve(name),
            None => Err(DrydocError::EngineNotFound("<default>".to_string())),
        }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.engines.iter().map(|(name, _)| name.as_str())
    }
}
