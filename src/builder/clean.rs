//! Artifact cleanup.
//!
//! Removes the module files a build would have produced, at both target
//! locations. The expected filename comes from the same
//! [`Toolchain::module_filename`] path the builder uses, never a
//! hardcoded suffix, so build and clean cannot diverge.

use std::fs;
use std::io;

use crate::core::error::Result;
use crate::core::spec::{BuildTarget, Layout};

use super::toolchain::Toolchain;

/// Remove previously built module files.
///
/// A missing artifact is an expected no-op, reported at debug level only.
/// Removal failures are downgraded to warnings so repeated cleans of a
/// partially-built tree still complete successfully.
pub fn clean(name: &str, toolchain: &dyn Toolchain, layout: &Layout, dry_run: bool) -> Result<()> {
    let filename = toolchain.module_filename(name);

    for target in BuildTarget::ALL {
        let path = layout.target_dir(target).join(&filename);

        if !path.exists() {
            tracing::debug!("{} does not exist, nothing to clean", path.display());
            continue;
        }

        if dry_run {
            tracing::info!("would remove {}", path.display());
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => tracing::info!("removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                tracing::warn!("{} could not be cleaned: permission denied", path.display());
            }
            Err(e) => {
                tracing::warn!("{} could not be cleaned: {}", path.display(), e);
            }
        }
    }

    Ok(())
}
