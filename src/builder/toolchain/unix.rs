//! cc/gcc/clang style toolchain implementation.
//!
//! Also serves unrecognized compilers: those get the same invocation
//! shape but a [`CompilerProfile::Unknown`] profile with no extra
//! arguments.

use std::path::{Path, PathBuf};

use super::{CommandSpec, CompileInput, CompilerProfile, LinkInput, Toolchain};

/// Unix-style toolchain: one driver for both compiling and linking.
#[derive(Debug, Clone)]
pub struct UnixToolchain {
    /// Path to the compiler driver.
    pub cc: PathBuf,
    /// Recognized family (Unix or Unknown).
    pub profile: CompilerProfile,
}

impl UnixToolchain {
    pub fn new(cc: PathBuf, profile: CompilerProfile) -> Self {
        UnixToolchain { cc, profile }
    }
}

impl Toolchain for UnixToolchain {
    fn profile(&self) -> CompilerProfile {
        self.profile
    }

    fn compiler_path(&self) -> &Path {
        &self.cc
    }

    fn compile_command(&self, input: &CompileInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.cc);

        // Compile only; position-independent code for a loadable module
        cmd = cmd.arg("-c");
        cmd = cmd.arg("-fPIC");

        for (name, value) in &input.defines {
            match value {
                Some(v) => cmd = cmd.arg(format!("-D{}={}", name, v)),
                None => cmd = cmd.arg(format!("-D{}", name)),
            }
        }

        cmd = cmd.args(input.cflags.iter().cloned());

        cmd = cmd.arg(input.source.display().to_string());
        cmd = cmd.arg("-o");
        cmd = cmd.arg(input.output.display().to_string());

        cmd
    }

    fn link_module_command(&self, input: &LinkInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.cc);

        cmd = cmd.arg("-shared");

        cmd = cmd.arg("-o");
        cmd = cmd.arg(input.output.display().to_string());

        for obj in &input.objects {
            cmd = cmd.arg(obj.display().to_string());
        }

        // Library order is preserved: single-pass linkers resolve
        // undefined symbols scanning left to right exactly once.
        for lib in &input.libs {
            cmd = cmd.arg(format!("-l{}", lib));
        }

        cmd = cmd.args(input.ldflags.iter().cloned());

        cmd
    }

    fn object_extension(&self) -> &str {
        "o"
    }

    fn module_extension(&self) -> &str {
        if cfg!(target_os = "macos") {
            "dylib"
        } else {
            "so"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toolchain() -> UnixToolchain {
        UnixToolchain::new(PathBuf::from("cc"), CompilerProfile::Unix)
    }

    #[test]
    fn test_compile_command_shape() {
        let input = CompileInput {
            source: PathBuf::from("scale.c"),
            output: PathBuf::from("build/obj/scale.o"),
            defines: vec![
                ("ENABLE_CPU_SIMD_BACKEND".to_string(), None),
                ("VERSION".to_string(), Some("1".to_string())),
            ],
            cflags: vec!["-O2".to_string()],
        };

        let cmd = toolchain().compile_command(&input);
        assert_eq!(cmd.program, PathBuf::from("cc"));
        assert!(cmd.args.contains(&"-c".to_string()));
        assert!(cmd.args.contains(&"-fPIC".to_string()));
        assert!(cmd.args.contains(&"-DENABLE_CPU_SIMD_BACKEND".to_string()));
        assert!(cmd.args.contains(&"-DVERSION=1".to_string()));
        assert!(cmd.args.contains(&"-O2".to_string()));
        assert!(cmd.args.contains(&"scale.c".to_string()));
    }

    #[test]
    fn test_link_command_preserves_library_order() {
        let input = LinkInput {
            objects: vec![PathBuf::from("a.o"), PathBuf::from("b.o")],
            output: PathBuf::from("imgext.so"),
            libs: vec![
                "png".to_string(),
                "X11".to_string(),
                "GL".to_string(),
                "GLEW".to_string(),
            ],
            ldflags: vec![],
        };

        let cmd = toolchain().link_module_command(&input);
        assert!(cmd.args.contains(&"-shared".to_string()));

        let lib_args: Vec<_> = cmd
            .args
            .iter()
            .filter(|a| a.starts_with("-l"))
            .cloned()
            .collect();
        assert_eq!(lib_args, vec!["-lpng", "-lX11", "-lGL", "-lGLEW"]);
    }

    #[test]
    fn test_module_filename_uses_platform_extension() {
        let tc = toolchain();
        let name = tc.module_filename("imgext");
        assert!(name == "imgext.so" || name == "imgext.dylib");
    }
}
