//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::core::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Find files matching glob patterns relative to a base directory.
///
/// Results are sorted and deduplicated so discovery order is stable.
pub fn glob_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for pattern in patterns {
        let full_pattern = base.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let entries = match glob(&pattern_str) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("invalid glob pattern {}: {}", pattern, e);
                continue;
            }
        };

        for entry in entries {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        results.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_files_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.c"), "").unwrap();
        fs::write(tmp.path().join("a.c"), "").unwrap();
        fs::write(tmp.path().join("readme.txt"), "").unwrap();

        let files = glob_files(tmp.path(), &["*.c".to_string()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.c"));
        assert!(files[1].ends_with("b.c"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("build").join("obj");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }
}
