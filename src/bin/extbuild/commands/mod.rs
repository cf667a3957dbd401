//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

pub mod build;
pub mod clean;
pub mod completions;

/// Resolve the project directory argument (defaulting to cwd).
fn project_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match path {
        Some(p) => p,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    dir.canonicalize()
        .with_context(|| format!("project directory does not exist: {}", dir.display()))
}

/// Module name: explicit flag, else the project directory's name.
fn module_name(explicit: Option<String>, project_dir: &Path) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name);
    }
    match project_dir.file_name().and_then(|n| n.to_str()) {
        Some(name) => Ok(name.to_string()),
        None => bail!(
            "cannot derive a module name from {}; pass --module-name",
            project_dir.display()
        ),
    }
}
