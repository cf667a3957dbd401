//! Toolchain abstraction for the compilers that build the module.
//!
//! Provides a unified interface for generating compile and link commands
//! across toolchain families (cc/gcc/clang style and MSVC), plus the
//! platform naming convention for the finished module. Cleanup goes
//! through the same naming path as the build, so the two can never
//! disagree about what the artifact is called.

use std::path::{Path, PathBuf};

mod detect;
mod msvc;
mod unix;

pub use detect::{classify, detect_toolchain};
pub use msvc::MsvcToolchain;
pub use unix::UnixToolchain;

/// The recognized compiler family, with its fixed extra arguments.
///
/// Unrecognized compilers are a first-class case: they carry no extra
/// arguments and the build proceeds with plain invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerProfile {
    /// cl.exe / link.exe pairing.
    Msvc,
    /// cc/gcc/clang style driver.
    Unix,
    /// Anything else; plain invocation, zero extra arguments.
    Unknown,
}

impl CompilerProfile {
    /// Extra compiler arguments this family always receives.
    pub fn extra_compile_args(&self) -> &'static [&'static str] {
        match self {
            CompilerProfile::Unix => &[
                "-ffast-math",
                "-O2",
                "-Wdeclaration-after-statement",
                "-Wall",
                "-Werror",
            ],
            CompilerProfile::Msvc | CompilerProfile::Unknown => &[],
        }
    }

    /// Extra linker arguments this family always receives.
    pub fn extra_link_args(&self) -> &'static [&'static str] {
        match self {
            CompilerProfile::Msvc => &["/MANIFEST"],
            CompilerProfile::Unix | CompilerProfile::Unknown => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerProfile::Msvc => "msvc",
            CompilerProfile::Unix => "unix",
            CompilerProfile::Unknown => "unknown",
        }
    }
}

/// A command to execute: program plus arguments.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The program to run (e.g. "cc", "cl.exe").
    pub program: PathBuf,
    /// Command arguments.
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// Render the command for log and error messages.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Input for a compile step.
#[derive(Debug, Clone)]
pub struct CompileInput {
    /// Source file to compile.
    pub source: PathBuf,
    /// Output object file.
    pub output: PathBuf,
    /// Preprocessor defines (name, optional value).
    pub defines: Vec<(String, Option<String>)>,
    /// Additional compiler flags.
    pub cflags: Vec<String>,
}

/// Input for the module link step.
#[derive(Debug, Clone)]
pub struct LinkInput {
    /// Object files to link.
    pub objects: Vec<PathBuf>,
    /// Output module file.
    pub output: PathBuf,
    /// Libraries to link, in order (without -l prefix).
    pub libs: Vec<String>,
    /// Additional linker flags.
    pub ldflags: Vec<String>,
}

/// Trait for toolchain implementations.
///
/// Each toolchain knows how to generate commands for its compiler and how
/// the finished extension module is named on its platform.
pub trait Toolchain: Send + Sync {
    /// The compiler family this toolchain was classified as.
    fn profile(&self) -> CompilerProfile;

    /// Path to the compiler driver.
    fn compiler_path(&self) -> &Path;

    /// Generate a compile command for one source file.
    fn compile_command(&self, input: &CompileInput) -> CommandSpec;

    /// Generate the command that links objects into the extension module.
    fn link_module_command(&self, input: &LinkInput) -> CommandSpec;

    /// Object file extension, without the dot.
    fn object_extension(&self) -> &str;

    /// Extension-module file extension, without the dot.
    fn module_extension(&self) -> &str;

    /// Platform filename of the finished module.
    ///
    /// Both the builder and the cleaner must obtain the artifact name
    /// through this method.
    fn module_filename(&self, name: &str) -> String {
        format!("{}.{}", name, self.module_extension())
    }
}
