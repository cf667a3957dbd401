//! Core data model: the extension spec, build options, and errors.

pub mod error;
pub mod module;
pub mod spec;

pub use error::BuildError;
pub use spec::{BuildOptions, BuildTarget, ExtensionSpec, Layout};
