//! Base definition of the extension module.
//!
//! The module is described by the C sources and headers found in the
//! project directory plus its one unconditional link dependency, the
//! `png` image codec. Everything optional (backend macros, GPU
//! libraries, profile flags) is appended later by resolution.

use std::path::Path;

use crate::core::error::{BuildError, Result};
use crate::core::spec::ExtensionSpec;
use crate::util::fs::glob_files;

/// Library the module always links, regardless of feature options.
pub const CODEC_LIBRARY: &str = "png";

/// Build the base spec for the module rooted at `project_dir`.
///
/// Sources are every `*.c` file in the directory; headers (`*.h` and
/// `*.def`) are recorded as dependencies for staleness tracking only and
/// are never compiled directly.
pub fn base_spec(name: &str, project_dir: &Path) -> Result<ExtensionSpec> {
    if !project_dir.is_dir() {
        return Err(BuildError::Configuration(format!(
            "project directory does not exist: {}",
            project_dir.display()
        )));
    }

    let sources = glob_files(project_dir, &["*.c".to_string()])?;
    if sources.is_empty() {
        return Err(BuildError::Configuration(format!(
            "no C sources found in {}",
            project_dir.display()
        )));
    }

    let depends = glob_files(project_dir, &["*.h".to_string(), "*.def".to_string()])?;

    let mut spec = ExtensionSpec::new(name);
    spec.sources = sources;
    spec.depends = depends;
    spec.libraries.push(CODEC_LIBRARY.to_string());
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_base_spec_discovers_sources_and_headers() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("scale.c"), "").unwrap();
        fs::write(tmp.path().join("dither.c"), "").unwrap();
        fs::write(tmp.path().join("scale.h"), "").unwrap();
        fs::write(tmp.path().join("backend.def"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let spec = base_spec("imgext", tmp.path()).unwrap();
        assert_eq!(spec.name, "imgext");
        assert_eq!(spec.sources.len(), 2);
        assert_eq!(spec.depends.len(), 2);
        assert_eq!(spec.libraries, vec![CODEC_LIBRARY.to_string()]);
        assert!(spec.define_macros.is_empty());
    }

    #[test]
    fn test_base_spec_requires_sources() {
        let tmp = TempDir::new().unwrap();
        let err = base_spec("imgext", tmp.path()).unwrap_err();
        assert!(matches!(err, BuildError::Configuration(_)));
    }

    #[test]
    fn test_base_spec_rejects_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = base_spec("imgext", &missing).unwrap_err();
        assert!(matches!(err, BuildError::Configuration(_)));
    }
}
