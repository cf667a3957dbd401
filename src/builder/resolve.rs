//! Feature-flag and profile resolution.
//!
//! Maps the backend switches onto macro definitions and link libraries
//! and applies the compiler profile's fixed arguments. Resolution always
//! returns a fresh spec, leaving the base untouched, so resolving twice
//! cannot duplicate entries.

use crate::core::spec::{BuildOptions, ExtensionSpec};

use super::toolchain::CompilerProfile;

/// Macro defined when the SIMD CPU backend is enabled.
pub const SIMD_MACRO: &str = "ENABLE_CPU_SIMD_BACKEND";
/// Macro defined when the GPU backend is enabled.
pub const GPU_MACRO: &str = "ENABLE_GPU_BACKEND";

/// Libraries the GPU backend links, in this exact order: windowing
/// system, graphics context, extension loader. Single-pass linkers
/// resolve undefined symbols scanning left to right exactly once.
pub const GPU_LIBRARIES: [&str; 3] = ["X11", "GL", "GLEW"];

/// Resolve a base spec against a profile and the feature options.
///
/// Appends only; the macro and library lists of the result are a
/// superset of the base's. The same inputs always produce the same
/// output.
pub fn resolve_spec(
    base: &ExtensionSpec,
    profile: CompilerProfile,
    options: BuildOptions,
) -> ExtensionSpec {
    let mut spec = base.clone();

    spec.extra_compile_args
        .extend(profile.extra_compile_args().iter().map(|a| a.to_string()));
    spec.extra_link_args
        .extend(profile.extra_link_args().iter().map(|a| a.to_string()));

    if options.with_simd {
        spec.define_macros.push((SIMD_MACRO.to_string(), None));
    }

    if options.with_gpu {
        spec.define_macros.push((GPU_MACRO.to_string(), None));
        spec.libraries
            .extend(GPU_LIBRARIES.iter().map(|l| l.to_string()));
    }

    spec
}
