//! Test utilities for drydoc
//!
//! Shared helpers for building temporary DRY document trees in tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the crate root
///
/// Keeps all test temporary files in one gitignored location that is easy
/// to clean up manually if needed. The directory is removed automatically
/// when the returned `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the temporary
/// directory cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let root = std::env::current_dir().expect("Failed to get current directory");
    let tmp_base = root.join(".tmp");
    fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Write a fixture file at `relative` under `dir`, creating parent
/// directories as needed. Returns the file's full path.
///
/// # Panics
///
/// Panics on any I/O failure; fixtures that cannot be written are test
/// bugs, not conditions to handle.
pub fn write_fixture(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Assemble DRY document text from a variable section and a template.
pub fn dry_doc(variables: &str, template: &str) -> String {
    format!("{variables}\n...\n{template}")
}
