//! List registered engine pairs

use anyhow::Result;
use drydoc_core::EngineRegistry;

pub fn run() -> Result<()> {
    let registry = EngineRegistry::with_builtins();
    let default = registry.default_name();
    for name in registry.names() {
        if Some(name) == default {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
