//! MSVC toolchain implementation (cl.exe / link.exe).

use std::path::{Path, PathBuf};

use super::{CommandSpec, CompileInput, CompilerProfile, LinkInput, Toolchain};

/// MSVC toolchain: separate compiler and linker executables.
#[derive(Debug, Clone)]
pub struct MsvcToolchain {
    /// Path to cl.exe (compiler).
    pub cl: PathBuf,
    /// Path to link.exe (linker).
    pub link: PathBuf,
}

impl MsvcToolchain {
    pub fn new(cl: PathBuf, link: PathBuf) -> Self {
        MsvcToolchain { cl, link }
    }
}

impl Toolchain for MsvcToolchain {
    fn profile(&self) -> CompilerProfile {
        CompilerProfile::Msvc
    }

    fn compiler_path(&self) -> &Path {
        &self.cl
    }

    fn compile_command(&self, input: &CompileInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.cl);

        // Quiet logo, compile only
        cmd = cmd.arg("/nologo");
        cmd = cmd.arg("/c");

        for (name, value) in &input.defines {
            match value {
                Some(v) => cmd = cmd.arg(format!("/D{}={}", name, v)),
                None => cmd = cmd.arg(format!("/D{}", name)),
            }
        }

        cmd = cmd.args(input.cflags.iter().cloned());

        cmd = cmd.arg(input.source.display().to_string());
        cmd = cmd.arg(format!("/Fo{}", input.output.display()));

        cmd
    }

    fn link_module_command(&self, input: &LinkInput) -> CommandSpec {
        let mut cmd = CommandSpec::new(&self.link);

        cmd = cmd.arg("/nologo");
        cmd = cmd.arg("/DLL");
        cmd = cmd.arg(format!("/OUT:{}", input.output.display()));

        for obj in &input.objects {
            cmd = cmd.arg(obj.display().to_string());
        }

        for lib in &input.libs {
            cmd = cmd.arg(format!("{}.lib", lib));
        }

        cmd = cmd.args(input.ldflags.iter().cloned());

        cmd
    }

    fn object_extension(&self) -> &str {
        "obj"
    }

    fn module_extension(&self) -> &str {
        "dll"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toolchain() -> MsvcToolchain {
        MsvcToolchain::new(PathBuf::from("cl"), PathBuf::from("link"))
    }

    #[test]
    fn test_compile_command_shape() {
        let input = CompileInput {
            source: PathBuf::from("scale.c"),
            output: PathBuf::from("build/obj/scale.obj"),
            defines: vec![("ENABLE_GPU_BACKEND".to_string(), None)],
            cflags: vec![],
        };

        let cmd = toolchain().compile_command(&input);
        assert_eq!(cmd.program, PathBuf::from("cl"));
        assert!(cmd.args.contains(&"/nologo".to_string()));
        assert!(cmd.args.contains(&"/c".to_string()));
        assert!(cmd.args.contains(&"/DENABLE_GPU_BACKEND".to_string()));
        assert!(cmd.args.iter().any(|a| a.starts_with("/Fo")));
    }

    #[test]
    fn test_link_command_shape() {
        let input = LinkInput {
            objects: vec![PathBuf::from("scale.obj")],
            output: PathBuf::from("imgext.dll"),
            libs: vec!["png".to_string()],
            ldflags: vec!["/MANIFEST".to_string()],
        };

        let cmd = toolchain().link_module_command(&input);
        assert_eq!(cmd.program, PathBuf::from("link"));
        assert!(cmd.args.contains(&"/DLL".to_string()));
        assert!(cmd.args.contains(&"/OUT:imgext.dll".to_string()));
        assert!(cmd.args.contains(&"png.lib".to_string()));
        assert!(cmd.args.contains(&"/MANIFEST".to_string()));
    }

    #[test]
    fn test_module_filename_is_dll() {
        assert_eq!(toolchain().module_filename("imgext"), "imgext.dll");
    }
}
