//! extbuild - build orchestrator for a native extension module.
//!
//! This crate provides the core library functionality for extbuild:
//! toolchain detection, feature-flag resolution, the dual-target build
//! sequence, and artifact cleanup.

pub mod builder;
pub mod core;
pub mod util;

pub use crate::core::{BuildError, BuildOptions, BuildTarget, ExtensionSpec, Layout};

pub use crate::builder::{CompilerProfile, ModuleBuilder, Toolchain};
