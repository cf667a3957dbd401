//! The buildable unit and its surrounding value types.

use std::path::{Path, PathBuf};

/// Feature switches for the extension module's optional compute backends.
///
/// Constructed once from parsed CLI input and passed by value into every
/// stage; both switches default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Build with the SIMD-accelerated CPU backend.
    pub with_simd: bool,
    /// Build with the GPU-accelerated backend.
    pub with_gpu: bool,
}

/// Where a completed build's output is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    /// Out-of-tree output under the build directory, for packaging.
    Staged,
    /// Output next to the sources, for immediate local use.
    InPlace,
}

impl BuildTarget {
    /// Fixed build order: staged first, then in-place.
    pub const ALL: [BuildTarget; 2] = [BuildTarget::Staged, BuildTarget::InPlace];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::Staged => "staged",
            BuildTarget::InPlace => "in-place",
        }
    }
}

/// The unit of buildable work: one extension module.
///
/// A base spec lists the module's sources and mandatory libraries;
/// feature and profile resolution produce an enriched copy (see
/// [`crate::builder::resolve::resolve_spec`]). Lists only ever grow
/// during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSpec {
    /// Module name, without any platform prefix or extension.
    pub name: String,
    /// C sources compiled into the module.
    pub sources: Vec<PathBuf>,
    /// Headers the sources depend on (staleness tracking only).
    pub depends: Vec<PathBuf>,
    /// Preprocessor macro definitions (name, optional value).
    pub define_macros: Vec<(String, Option<String>)>,
    /// Libraries to link, in link order.
    pub libraries: Vec<String>,
    /// Extra compiler arguments.
    pub extra_compile_args: Vec<String>,
    /// Extra linker arguments.
    pub extra_link_args: Vec<String>,
}

impl ExtensionSpec {
    /// Create an empty spec for the named module.
    pub fn new(name: impl Into<String>) -> Self {
        ExtensionSpec {
            name: name.into(),
            sources: Vec::new(),
            depends: Vec::new(),
            define_macros: Vec::new(),
            libraries: Vec::new(),
            extra_compile_args: Vec::new(),
            extra_link_args: Vec::new(),
        }
    }
}

/// Physical layout of build inputs and outputs.
///
/// Both the builder and the cleaner resolve output locations through this
/// type, so "what would be built" and "what gets cleaned" cannot diverge.
#[derive(Debug, Clone)]
pub struct Layout {
    project_dir: PathBuf,
    build_dir: PathBuf,
}

impl Layout {
    /// Create a layout rooted at the project directory, with a build
    /// directory override.
    pub fn new(project_dir: impl Into<PathBuf>, build_dir: Option<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let build_dir = build_dir.unwrap_or_else(|| project_dir.join("build"));
        Layout {
            project_dir,
            build_dir,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Directory holding intermediate object files.
    pub fn obj_dir(&self) -> PathBuf {
        self.build_dir.join("obj")
    }

    /// Output directory for a build target.
    pub fn target_dir(&self, target: BuildTarget) -> PathBuf {
        match target {
            BuildTarget::Staged => self.build_dir.join("lib"),
            BuildTarget::InPlace => self.project_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_default_off() {
        let opts = BuildOptions::default();
        assert!(!opts.with_simd);
        assert!(!opts.with_gpu);
    }

    #[test]
    fn test_target_order_staged_first() {
        assert_eq!(
            BuildTarget::ALL,
            [BuildTarget::Staged, BuildTarget::InPlace]
        );
    }

    #[test]
    fn test_layout_dirs() {
        let layout = Layout::new("/proj", None);
        assert_eq!(layout.obj_dir(), PathBuf::from("/proj/build/obj"));
        assert_eq!(
            layout.target_dir(BuildTarget::Staged),
            PathBuf::from("/proj/build/lib")
        );
        assert_eq!(
            layout.target_dir(BuildTarget::InPlace),
            PathBuf::from("/proj")
        );
    }

    #[test]
    fn test_layout_build_dir_override() {
        let layout = Layout::new("/proj", Some(PathBuf::from("/tmp/out")));
        assert_eq!(
            layout.target_dir(BuildTarget::Staged),
            PathBuf::from("/tmp/out/lib")
        );
        assert_eq!(layout.obj_dir(), PathBuf::from("/tmp/out/obj"));
    }
}
