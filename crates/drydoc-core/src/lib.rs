//! drydoc-core - DRY document rendering
//!
//! A DRY document is a text file with a variable section and a template
//! section separated by a line containing only `...`:
//!
//! ```text
//! a = 1
//! b = 2
//! ...
//! a is {{ a }}, b is {{ b }}
//! ```
//!
//! Variable sections are parsed by a pluggable [`VariableEngine`], template
//! sections are rendered by a pluggable [`TemplateEngine`]; the two are
//! combined into named [`EnginePair`]s held by an [`EngineRegistry`].
//! Templates may pull in other documents through the `include` and
//! `filevars` functions, each call carrying its own [`ResolveContext`]
//! scoped to the including document's directory.
//!
//! Note that the `system` template function executes arbitrary shell
//! commands: anyone who can edit a document's template body can run
//! commands with the renderer's privileges. See [`context`] for details.

// Core modules
pub mod bindings;
pub mod context;
pub mod document;
pub mod engine;
pub mod error;
pub mod io;
pub mod split;

// Re-export commonly used types
pub use bindings::Bindings;
pub use context::{FunctionTable, ResolveContext};
pub use document::Document;
pub use engine::{EngineError, EnginePair, EngineRegistry, Renderable, TemplateEngine, VariableEngine};
pub use error::{DrydocError, Result};
pub use io::Encoding;
pub use split::{split, Sections};
