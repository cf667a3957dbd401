//! Preflight checks for required development libraries.
//!
//! The codec library is linked unconditionally and the GPU libraries
//! conditionally; verifying them up front turns an opaque linker failure
//! into an actionable "missing dependency" error. Lookup asks
//! `pkg-config` when available and falls back to scanning well-known
//! library directories. When neither method can decide, the check warns
//! and defers to the linker rather than failing a buildable tree.

use std::path::{Path, PathBuf};

use crate::core::error::{BuildError, Result};
use crate::core::module::CODEC_LIBRARY;
use crate::core::spec::BuildOptions;
use crate::util::process::ProcessBuilder;

use super::resolve::GPU_LIBRARIES;

/// Libraries the given options require at link time.
pub fn required_libraries(options: BuildOptions) -> Vec<&'static str> {
    let mut libs = vec![CODEC_LIBRARY];
    if options.with_gpu {
        libs.extend(GPU_LIBRARIES);
    }
    libs
}

/// Verify every required library before the toolchain runs.
pub fn check_dependencies(options: BuildOptions) -> Result<()> {
    let pkg_config = which::which("pkg-config").ok();
    let dirs = default_search_dirs();

    for lib in required_libraries(options) {
        match probe(lib, pkg_config.as_deref(), &dirs) {
            Probe::Found => tracing::debug!("found {} development library", lib),
            Probe::Missing => {
                return Err(BuildError::MissingDependency {
                    library: lib.to_string(),
                    hint: format!("install the {} development package and retry", lib),
                });
            }
            Probe::Undecided => {
                tracing::warn!(
                    "could not verify {} development library; deferring to the linker",
                    lib
                );
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Probe {
    Found,
    Missing,
    Undecided,
}

fn probe(lib: &str, pkg_config: Option<&Path>, dirs: &[PathBuf]) -> Probe {
    if scan_dirs(lib, dirs) {
        return Probe::Found;
    }

    let Some(pkg_config) = pkg_config else {
        // No pkg-config and no hit in the standard dirs: the library may
        // still live somewhere the scan does not cover.
        return Probe::Undecided;
    };

    match ProcessBuilder::new(pkg_config)
        .arg("--exists")
        .arg(pkg_config_name(lib))
        .exec()
    {
        Ok(output) if output.status.success() => Probe::Found,
        Ok(_) => Probe::Missing,
        Err(_) => Probe::Undecided,
    }
}

/// pkg-config package name for a link library.
fn pkg_config_name(lib: &str) -> String {
    match lib {
        "png" => "libpng".to_string(),
        other => other.to_lowercase(),
    }
}

/// Look for a linkable file for `lib` in the given directories.
fn scan_dirs(lib: &str, dirs: &[PathBuf]) -> bool {
    let unix_prefix = format!("lib{}.", lib);
    let msvc_name = format!("{}.lib", lib.to_lowercase());

    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&unix_prefix)
                && (name.contains(".so") || name.contains(".a") || name.contains(".dylib"))
            {
                return true;
            }
            if name.to_lowercase() == msvc_name {
                return true;
            }
        }
    }

    false
}

/// Well-known library directories for the current platform.
fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/lib",
        "/usr/local/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/opt/homebrew/lib",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    // MSVC publishes its search path through LIB
    if let Ok(lib_env) = std::env::var("LIB") {
        dirs.extend(std::env::split_paths(&lib_env));
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_required_libraries_table() {
        assert_eq!(required_libraries(BuildOptions::default()), vec!["png"]);

        let gpu = BuildOptions {
            with_simd: false,
            with_gpu: true,
        };
        assert_eq!(
            required_libraries(gpu),
            vec!["png", "X11", "GL", "GLEW"]
        );

        // SIMD adds no link dependency
        let simd = BuildOptions {
            with_simd: true,
            with_gpu: false,
        };
        assert_eq!(required_libraries(simd), vec!["png"]);
    }

    #[test]
    fn test_scan_finds_shared_object() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("libpng16.so.16"), b"").unwrap();
        fs::write(tmp.path().join("libpng.so"), b"").unwrap();

        assert!(scan_dirs("png", &[tmp.path().to_path_buf()]));
    }

    #[test]
    fn test_scan_finds_msvc_import_library() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("PNG.lib"), b"").unwrap();

        assert!(scan_dirs("png", &[tmp.path().to_path_buf()]));
    }

    #[test]
    fn test_scan_misses_unrelated_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("libjpeg.so"), b"").unwrap();
        fs::write(tmp.path().join("png.txt"), b"").unwrap();

        assert!(!scan_dirs("png", &[tmp.path().to_path_buf()]));
    }

    #[test]
    fn test_probe_undecided_without_pkg_config() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            probe("png", None, &[tmp.path().to_path_buf()]),
            Probe::Undecided
        );
    }

    #[test]
    fn test_pkg_config_names() {
        assert_eq!(pkg_config_name("png"), "libpng");
        assert_eq!(pkg_config_name("X11"), "x11");
        assert_eq!(pkg_config_name("GL"), "gl");
        assert_eq!(pkg_config_name("GLEW"), "glew");
    }
}
