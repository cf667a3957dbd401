//! Build orchestration: toolchain handling, flag resolution, the
//! dual-target build sequence, and artifact cleanup.

pub mod clean;
pub mod dual;
pub mod preflight;
pub mod resolve;
pub mod toolchain;

pub use clean::clean;
pub use dual::{Artifact, ModuleBuilder};
pub use preflight::check_dependencies;
pub use resolve::resolve_spec;
pub use toolchain::{classify, detect_toolchain, CommandSpec, CompilerProfile, Toolchain};
