//! Resolution contexts and template functions
//!
//! Every render call carries a [`ResolveContext`]: the directory paths
//! resolve against, the text encoding, and the engine pair in use. The
//! context is a value, not shared state - each `include` builds a copy
//! scoped to the included file's directory, so nothing a nested render
//! does can leak back into the caller's resolution.
//!
//! The functions bound into template scope are an explicit allow-list:
//!
//! - `filevars(path)` - variables of another document
//! - `include(path, render=true)` - another document, rendered or raw
//! - `system(cmd)` - captured output of a shell command
//!
//! # Trust boundary
//!
//! `system` executes arbitrary shell commands with the renderer's
//! privileges and the context directory as working directory. Anyone who
//! can edit a document's template body can run commands; only render
//! documents you trust.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use serde_json::Value;

use crate::document::Document;
use crate::engine::{EngineError, EnginePair};
use crate::io::{self, Encoding};

/// Named arguments of a template function call.
pub type FnArgs = HashMap<String, Value>;

/// A function callable from template scope.
pub type TemplateFn = Arc<dyn Fn(&FnArgs) -> Result<Value, EngineError> + Send + Sync>;

/// The enumerated set of functions in a template's scope.
#[derive(Clone, Default)]
pub struct FunctionTable {
    entries: BTreeMap<String, TemplateFn>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, func: TemplateFn) {
        self.entries.insert(name.into(), func);
    }

    pub fn get(&self, name: &str) -> Option<&TemplateFn> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TemplateFn)> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Per-render resolution state, copied at every include boundary.
#[derive(Clone)]
pub struct ResolveContext {
    dir: PathBuf,
    encoding: Encoding,
    engine: Arc<EnginePair>,
}

impl ResolveContext {
    /// A context resolving paths against `dir`, which should be absolute.
    pub fn new(dir: impl Into<PathBuf>, encoding: Encoding, engine: Arc<EnginePair>) -> Self {
        Self {
            dir: dir.into(),
            encoding,
            engine,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn engine(&self) -> &Arc<EnginePair> {
        &self.engine
    }

    /// The context an included file renders under: a copy of `self` with
    /// the directory replaced by the file's parent. `self` is untouched.
    pub fn for_included(&self, file: &Path) -> ResolveContext {
        let mut child = self.clone();
        if let Some(parent) = file.parent() {
            child.dir = parent.to_path_buf();
        }
        child
    }

    /// Build the function table for templates rendered under this context.
    /// Each entry closes over its own copy of the context.
    pub fn functions(&self) -> FunctionTable {
        let mut table = FunctionTable::new();
        let ctx = self.clone();
        table.register("filevars", Arc::new(move |args: &FnArgs| filevars(&ctx, args)));
        let ctx = self.clone();
        table.register("include", Arc::new(move |args: &FnArgs| include(&ctx, args)));
        let ctx = self.clone();
        table.register("system", Arc::new(move |args: &FnArgs| system(&ctx, args)));
        table
    }
}

/// `filevars(path)`: the variables of the document at `path`, resolved
/// against the context directory.
fn filevars(ctx: &ResolveContext, args: &FnArgs) -> Result<Value, EngineError> {
    let path = ctx.dir.join(str_arg(args, "path", "filevars")?);
    let text = io::read_text(&path, ctx.encoding).map_err(|e| EngineError::new(e.to_string()))?;
    let doc = Document::with_source(text, &path, ctx.engine.clone());
    let vars = doc
        .get_variables()
        .map_err(|e| EngineError::new(e.to_string()))?;
    Ok(vars.to_value())
}

/// `include(path, render=true)`: another document's rendered text, or its
/// raw contents when `render` is false.
///
/// Rendering recurses with a context scoped to the included file's
/// directory, so nested includes resolve relative to their own document,
/// arbitrarily deep. There is no cycle detection: a document that includes
/// itself, directly or transitively, recurses until the stack runs out.
fn include(ctx: &ResolveContext, args: &FnArgs) -> Result<Value, EngineError> {
    let path = ctx.dir.join(str_arg(args, "path", "include")?);
    let render = match args.get("render") {
        None => true,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(EngineError::new(format!(
                "include: argument 'render' must be a boolean, got {other}"
            )))
        }
    };

    let text = io::read_text(&path, ctx.encoding).map_err(|e| EngineError::new(e.to_string()))?;
    if !render {
        return Ok(Value::String(text));
    }

    let child = ctx.for_included(&path);
    let doc = Document::with_source(text, &path, ctx.engine.clone());
    let rendered = doc
        .render_with(None, &child.functions())
        .map_err(|e| EngineError::new(e.to_string()))?;
    Ok(Value::String(rendered))
}

/// `system(cmd)`: captured stdout followed by stderr of `cmd`, run through
/// the platform shell in the context directory. The command's exit status
/// is deliberately ignored; output is returned either way.
fn system(ctx: &ResolveContext, args: &FnArgs) -> Result<Value, EngineError> {
    let cmd = str_arg(args, "cmd", "system")?;
    let output = shell_command(cmd)
        .current_dir(&ctx.dir)
        .output()
        .map_err(|e| EngineError::new(format!("system: {e}")))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(Value::String(text))
}

#[cfg(unix)]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);
    command
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", cmd]);
    command
}

fn str_arg<'a>(args: &'a FnArgs, name: &str, func: &str) -> Result<&'a str, EngineError> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(EngineError::new(format!(
            "{func}: argument '{name}' must be a string, got {other}"
        ))),
        None => Err(EngineError::new(format!(
            "{func}: missing argument '{name}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineRegistry;
    use serde_json::json;

    fn ctx_in(dir: &Path) -> ResolveContext {
        let engine = EngineRegistry::with_builtins().resolve("simple").unwrap();
        ResolveContext::new(dir, Encoding::Utf8, engine)
    }

    #[test]
    fn for_included_replaces_directory_only() {
        let parent = ctx_in(Path::new("/top"));
        let child = parent.for_included(Path::new("/top/sub/doc.txt"));
        assert_eq!(child.dir(), Path::new("/top/sub"));
        assert_eq!(parent.dir(), Path::new("/top"));
        assert_eq!(child.encoding(), parent.encoding());
        assert_eq!(child.engine().name(), parent.engine().name());
    }

    #[test]
    fn function_table_is_the_allow_list() {
        let table = ctx_in(Path::new("/top")).functions();
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["filevars", "include", "system"]);
    }

    #[test]
    fn include_reads_raw_when_render_is_false() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let dir = temp.path();
        std::fs::write(dir.join("raw.txt"), "a = 1\n...\n{{ a }}\n").unwrap();

        let mut args = FnArgs::new();
        args.insert("path".into(), json!("raw.txt"));
        args.insert("render".into(), json!(false));
        let value = include(&ctx_in(dir), &args).unwrap();
        assert_eq!(value, json!("a = 1\n...\n{{ a }}\n"));
    }

    #[test]
    fn include_renders_by_default() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let dir = temp.path();
        std::fs::write(dir.join("doc.txt"), "a = 1\n...\na is {{ a }}\n").unwrap();

        let mut args = FnArgs::new();
        args.insert("path".into(), json!("doc.txt"));
        let value = include(&ctx_in(dir), &args).unwrap();
        assert_eq!(value, json!("a is 1\n"));
    }

    #[test]
    fn include_missing_file_is_an_error() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let mut args = FnArgs::new();
        args.insert("path".into(), json!("absent.txt"));
        assert!(include(&ctx_in(temp.path()), &args).is_err());
    }

    #[test]
    fn filevars_returns_document_variables() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let dir = temp.path();
        std::fs::write(dir.join("vars.txt"), "a = 1\nb = two\n...\n").unwrap();

        let mut args = FnArgs::new();
        args.insert("path".into(), json!("vars.txt"));
        let value = filevars(&ctx_in(dir), &args).unwrap();
        assert_eq!(value, json!({ "a": "1", "b": "two" }));
    }

    #[cfg(unix)]
    #[test]
    fn system_runs_in_context_directory() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let dir = temp.path().canonicalize().unwrap();

        let mut args = FnArgs::new();
        args.insert("cmd".into(), json!("pwd"));
        let value = system(&ctx_in(&dir), &args).unwrap();
        assert_eq!(value, json!(format!("{}\n", dir.display())));
    }

    #[cfg(unix)]
    #[test]
    fn system_captures_output_regardless_of_exit_status() {
        let temp = drydoc_testkit::temp_dir_in_workspace();
        let mut args = FnArgs::new();
        args.insert("cmd".into(), json!("echo out; echo err >&2; false"));
        let value = system(&ctx_in(temp.path()), &args).unwrap();
        assert_eq!(value, json!("out\nerr\n"));
    }

    #[test]
    fn missing_argument_is_reported_by_name() {
        let err = include(&ctx_in(Path::new("/top")), &FnArgs::new()).unwrap_err();
        assert!(err.to_string().contains("missing argument 'path'"));
    }
}
