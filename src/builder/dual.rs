//! Dual-target build sequencing.
//!
//! The module is built twice per invocation: once staged under the build
//! directory for packaging, once in place next to the sources for
//! immediate local use. The order is fixed (staged first) and a failure
//! in the staged pass aborts before the in-place pass starts, so a
//! partially-succeeded pair of outputs is never produced.

use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::spec::{BuildTarget, ExtensionSpec, Layout};
use crate::util::fs::ensure_dir;
use crate::util::process::ProcessBuilder;

use super::toolchain::{CompileInput, LinkInput, Toolchain};

/// A finished build output.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub target: BuildTarget,
    pub path: PathBuf,
}

/// Drives the compile-and-link step across both build targets.
pub struct ModuleBuilder<'a> {
    toolchain: &'a dyn Toolchain,
    layout: &'a Layout,
    dry_run: bool,
}

impl<'a> ModuleBuilder<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, layout: &'a Layout) -> Self {
        ModuleBuilder {
            toolchain,
            layout,
            dry_run: false,
        }
    }

    /// Log each command instead of executing it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build the module for every target, staged first.
    ///
    /// Sequential and blocking throughout; the first non-zero toolchain
    /// exit aborts the remaining targets.
    pub fn build(&self, spec: &ExtensionSpec) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();

        for target in BuildTarget::ALL {
            artifacts.push(self.build_target(spec, target)?);
        }

        Ok(artifacts)
    }

    fn build_target(&self, spec: &ExtensionSpec, target: BuildTarget) -> Result<Artifact> {
        tracing::info!("building {} ({})", spec.name, target.as_str());

        let mut objects = Vec::with_capacity(spec.sources.len());
        for source in &spec.sources {
            objects.push(self.compile(spec, source)?);
        }

        self.link(spec, objects, target)
    }

    /// Compile one source file into the shared object directory.
    fn compile(&self, spec: &ExtensionSpec, source: &PathBuf) -> Result<PathBuf> {
        let obj_dir = self.layout.obj_dir();
        if !self.dry_run {
            ensure_dir(&obj_dir)?;
        }

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| spec.name.clone());
        let output = obj_dir.join(format!("{}.{}", stem, self.toolchain.object_extension()));

        let input = CompileInput {
            source: source.clone(),
            output: output.clone(),
            defines: spec.define_macros.clone(),
            cflags: spec.extra_compile_args.clone(),
        };

        let cmd = self.toolchain.compile_command(&input);
        if self.dry_run {
            tracing::info!("would run: {}", cmd.display());
            return Ok(output);
        }

        tracing::debug!("compiling {} -> {}", source.display(), output.display());
        ProcessBuilder::from_spec(&cmd).exec_and_check()?;

        Ok(output)
    }

    /// Link the objects into the module at the target's location.
    fn link(
        &self,
        spec: &ExtensionSpec,
        objects: Vec<PathBuf>,
        target: BuildTarget,
    ) -> Result<Artifact> {
        let out_dir = self.layout.target_dir(target);
        if !self.dry_run {
            ensure_dir(&out_dir)?;
        }

        let output = out_dir.join(self.toolchain.module_filename(&spec.name));

        let input = LinkInput {
            objects,
            output: output.clone(),
            libs: spec.libraries.clone(),
            ldflags: spec.extra_link_args.clone(),
        };

        let cmd = self.toolchain.link_module_command(&input);
        if self.dry_run {
            tracing::info!("would run: {}", cmd.display());
            return Ok(Artifact {
                target,
                path: output,
            });
        }

        tracing::debug!("linking {}", output.display());
        ProcessBuilder::from_spec(&cmd).exec_and_check()?;

        tracing::info!("built {}", output.display());
        Ok(Artifact {
            target,
            path: output,
        })
    }
}
