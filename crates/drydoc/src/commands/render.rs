//! Render command - read a DRY document, render it, write the result

use std::env;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use colored::Colorize;
use drydoc_core::{io, Document, Encoding, EngineRegistry, ResolveContext};

use crate::output;

/// Render one document end to end.
///
/// Paths inside the document (`include`, `filevars`, `system`) resolve
/// against the input file's directory, or the current directory when
/// reading standard input.
pub fn run(
    filename: Option<PathBuf>,
    encoding: String,
    output: Option<PathBuf>,
    engine: Option<String>,
    verbose: bool,
) -> Result<()> {
    let encoding: Encoding = encoding.parse()?;

    let registry = EngineRegistry::with_builtins();
    let pair = match &engine {
        Some(name) => registry.resolve(name)?,
        None => registry.default_pair()?,
    };

    let (text, dir, source) = match &filename {
        Some(path) => {
            let text = io::read_text(path, encoding)
                .with_context(|| format!("could not open file '{}'", path.display()))?;
            let full = path
                .canonicalize()
                .with_context(|| format!("could not resolve path '{}'", path.display()))?;
            let dir = match full.parent() {
                Some(parent) => parent.to_path_buf(),
                None => env::current_dir()?,
            };
            (text, dir, Some(full))
        }
        None => (io::read_stdin(encoding)?, env::current_dir()?, None),
    };

    if verbose {
        eprintln!("{} Rendering with engine '{}'", "→".cyan(), pair.name());
    }

    let ctx = ResolveContext::new(dir, encoding, pair.clone());
    let document = match source {
        Some(path) => Document::with_source(text, path, pair),
        None => Document::new(text, pair),
    };
    let rendered = document.render_with(None, &ctx.functions())?;

    match output {
        Some(path) => {
            io::write_text(&path, &rendered, encoding)
                .with_context(|| format!("could not open file '{}'", path.display()))?;
            if verbose {
                eprintln!("{} Wrote '{}'", "✓".green().bold(), path.display());
            }
        }
        None => output::write_stdout(&rendered)?,
    }

    Ok(())
}
