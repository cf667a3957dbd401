//! `extbuild build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use extbuild::builder::{check_dependencies, detect_toolchain, resolve_spec, ModuleBuilder};
use extbuild::core::module;
use extbuild::core::{BuildOptions, Layout};

pub fn execute(args: BuildArgs) -> Result<()> {
    let project_dir = super::project_dir(args.path)?;
    let name = super::module_name(args.module_name, &project_dir)?;

    let options = BuildOptions {
        with_simd: args.with_simd,
        with_gpu: args.with_gpu,
    };

    let toolchain = detect_toolchain(args.cc.as_deref())?;

    if !args.skip_preflight {
        check_dependencies(options)?;
    }

    let base = module::base_spec(&name, &project_dir)?;
    let spec = resolve_spec(&base, toolchain.profile(), options);

    let layout = Layout::new(project_dir, args.build_dir);
    let artifacts = ModuleBuilder::new(toolchain.as_ref(), &layout)
        .dry_run(args.dry_run)
        .build(&spec)?;

    if !args.dry_run {
        for artifact in &artifacts {
            eprintln!(
                "    Finished {} -> {}",
                artifact.target.as_str(),
                artifact.path.display()
            );
        }
    }

    Ok(())
}
