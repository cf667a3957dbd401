//! Toolchain discovery and classification.

use std::path::{Path, PathBuf};

use crate::core::error::{BuildError, Result};

use super::{CompilerProfile, MsvcToolchain, Toolchain, UnixToolchain};

/// Classify a compiler identifier into a profile.
///
/// Pure string classification, no side effects. Anything the table does
/// not recognize maps to [`CompilerProfile::Unknown`] rather than an
/// error; an unknown compiler is driven with user-default flags only.
pub fn classify(identifier: &str) -> CompilerProfile {
    // Split on both separators so Windows-style identifiers classify
    // the same everywhere
    let name = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier)
        .to_lowercase();
    let name = name.strip_suffix(".exe").unwrap_or(&name);

    if name == "cl" {
        return CompilerProfile::Msvc;
    }

    if name.contains("gcc")
        || name.contains("clang")
        || name == "cc"
        || name == "c++"
        || name.ends_with("-cc")
    {
        return CompilerProfile::Unix;
    }

    CompilerProfile::Unknown
}

/// Detect the toolchain to build with.
///
/// Priority: explicit `--cc` override, then the `CC` environment
/// variable, then common compiler names on PATH. The resulting profile
/// decides the invocation shape; `cl` additionally needs `link.exe`.
pub fn detect_toolchain(cc_override: Option<&Path>) -> Result<Box<dyn Toolchain>> {
    let cc = match cc_override {
        Some(cc) => cc.to_path_buf(),
        None => match std::env::var("CC") {
            Ok(cc_env) => PathBuf::from(cc_env),
            Err(_) => find_default_compiler()?,
        },
    };

    let profile = classify(&cc.to_string_lossy());
    tracing::debug!("using compiler {} ({})", cc.display(), profile.as_str());

    match profile {
        CompilerProfile::Msvc => {
            let link = find_linker_for(&cc)?;
            Ok(Box::new(MsvcToolchain::new(cc, link)))
        }
        CompilerProfile::Unix | CompilerProfile::Unknown => {
            Ok(Box::new(UnixToolchain::new(cc, profile)))
        }
    }
}

/// Search PATH for a usable compiler.
fn find_default_compiler() -> Result<PathBuf> {
    for name in ["cc", "gcc", "clang", "cl"] {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }

    Err(BuildError::Configuration(
        "no C compiler found; set CC, pass --cc, or install one of cc/gcc/clang/cl".to_string(),
    ))
}

/// Locate link.exe for an MSVC compiler: next to cl.exe first, PATH second.
fn find_linker_for(cl: &Path) -> Result<PathBuf> {
    if let Some(dir) = cl.parent() {
        let sibling = dir.join("link.exe");
        if sibling.exists() {
            return Ok(sibling);
        }
    }

    which::which("link").map_err(|_| {
        BuildError::Configuration(format!(
            "found MSVC compiler {} but no link.exe alongside it or on PATH",
            cl.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_msvc() {
        assert_eq!(classify("cl"), CompilerProfile::Msvc);
        assert_eq!(classify("cl.exe"), CompilerProfile::Msvc);
        assert_eq!(classify("C:\\tools\\cl.exe"), CompilerProfile::Msvc);
    }

    #[test]
    fn test_classify_unix_family() {
        assert_eq!(classify("cc"), CompilerProfile::Unix);
        assert_eq!(classify("gcc"), CompilerProfile::Unix);
        assert_eq!(classify("clang"), CompilerProfile::Unix);
        assert_eq!(classify("/usr/bin/gcc-13"), CompilerProfile::Unix);
        assert_eq!(classify("x86_64-linux-gnu-gcc"), CompilerProfile::Unix);
        assert_eq!(classify("clang++"), CompilerProfile::Unix);
    }

    #[test]
    fn test_classify_unknown_never_fails() {
        let profile = classify("some-exotic-compiler");
        assert_eq!(profile, CompilerProfile::Unknown);
        assert!(profile.extra_compile_args().is_empty());
        assert!(profile.extra_link_args().is_empty());
    }

    #[test]
    fn test_classify_does_not_match_cc_substring() {
        // "mycc" is not the cc driver
        assert_eq!(classify("mycc"), CompilerProfile::Unknown);
    }

    #[test]
    fn test_profile_fixed_args() {
        assert!(CompilerProfile::Unix
            .extra_compile_args()
            .contains(&"-Werror"));
        assert!(CompilerProfile::Unix
            .extra_compile_args()
            .contains(&"-O2"));
        assert!(CompilerProfile::Unix.extra_link_args().is_empty());
        assert_eq!(CompilerProfile::Msvc.extra_link_args(), &["/MANIFEST"]);
        assert!(CompilerProfile::Msvc.extra_compile_args().is_empty());
    }
}
