//! Document model
//!
//! Binds a document's raw text to an engine pair and exposes variable
//! parsing and rendering. Documents are immutable; rendering produces a
//! new string.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bindings::Bindings;
use crate::context::FunctionTable;
use crate::engine::{EngineError, EnginePair};
use crate::error::{DrydocError, Result};
use crate::split::{self, Sections};

pub struct Document {
    text: String,
    source: Option<PathBuf>,
    engine: Arc<EnginePair>,
}

impl Document {
    pub fn new(text: impl Into<String>, engine: Arc<EnginePair>) -> Self {
        Self {
            text: text.into(),
            source: None,
            engine,
        }
    }

    /// A document read from `source`; the path is used in error messages.
    pub fn with_source(
        text: impl Into<String>,
        source: impl Into<PathBuf>,
        engine: Arc<EnginePair>,
    ) -> Self {
        Self {
            text: text.into(),
            source: Some(source.into()),
            engine,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn engine(&self) -> &Arc<EnginePair> {
        &self.engine
    }

    /// The document's sections, or `None` for a non-DRY document.
    pub fn sections(&self) -> Option<Sections<'_>> {
        split::split(&self.text)
    }

    /// Parse the variable section into bindings.
    ///
    /// A non-DRY document and an empty or whitespace-only variable section
    /// both yield empty bindings; the variable engine is only invoked on
    /// non-empty variable text.
    pub fn get_variables(&self) -> Result<Bindings> {
        let Some(sections) = self.sections() else {
            return Ok(Bindings::new());
        };
        let variable_text = sections.variable_text.trim();
        if variable_text.is_empty() {
            return Ok(Bindings::new());
        }
        self.engine
            .parse_variables(variable_text)
            .map_err(|e| self.variable_error(e))
    }

    /// Render without template functions in scope.
    pub fn render(&self, extra: Option<&Bindings>) -> Result<String> {
        self.render_with(extra, &FunctionTable::new())
    }

    /// Render the document.
    ///
    /// A non-DRY document renders as identity: the original text comes
    /// back unchanged. Otherwise the variable section's bindings, with
    /// `extra` merged over them (extra wins on collisions), are applied to
    /// the compiled template. Leading newlines (only newlines, not general
    /// whitespace) are stripped from the result, and a trailing newline is
    /// restored when the source text ended with one but the non-empty
    /// rendered text does not.
    pub fn render_with(&self, extra: Option<&Bindings>, functions: &FunctionTable) -> Result<String> {
        let Some(sections) = self.sections() else {
            return Ok(self.text.clone());
        };

        let mut bindings = self.get_variables()?;
        if let Some(extra) = extra {
            bindings.merge(extra);
        }

        let template = self
            .engine
            .compile(sections.template_text)
            .map_err(|e| self.template_error(e))?;
        let rendered = template
            .render(&bindings, functions)
            .map_err(|e| self.template_error(e))?;

        let mut rendered = rendered.trim_start_matches('\n').to_string();
        if !rendered.is_empty() && self.text.ends_with('\n') && !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    fn variable_error(&self, err: EngineError) -> DrydocError {
        DrydocError::VariableSyntax(self.located(err))
    }

    fn template_error(&self, err: EngineError) -> DrydocError {
        DrydocError::TemplateSyntax(self.located(err))
    }

    fn located(&self, err: EngineError) -> String {
        match &self.source {
            Some(path) => format!("{} in '{}'", err, path.display()),
            None => err.to_string(),
        }
    }
}
