//! `extbuild clean` command

use anyhow::Result;

use crate::cli::CleanArgs;
use extbuild::builder::{clean, detect_toolchain};
use extbuild::core::Layout;

pub fn execute(args: CleanArgs) -> Result<()> {
    let project_dir = super::project_dir(args.path)?;
    let name = super::module_name(args.module_name, &project_dir)?;

    // Same toolchain machinery as the build, so the computed artifact
    // name matches what a build would have produced.
    let toolchain = detect_toolchain(args.cc.as_deref())?;

    let layout = Layout::new(project_dir, args.build_dir);
    clean(&name, toolchain.as_ref(), &layout, args.dry_run)?;

    Ok(())
}
