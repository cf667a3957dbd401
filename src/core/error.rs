//! Error taxonomy for build and clean operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Invalid option combination or unusable project directory.
    /// Surfaced before any build step is attempted.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The compiler or linker exited non-zero. Aborts the remaining
    /// build sequence; captured stderr is relayed verbatim.
    #[error("`{command}` failed with exit code {code:?}\n{stderr}")]
    Toolchain {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A required development library was not found during preflight.
    #[error("missing dependency: {library} development library not found\n{hint}")]
    MissingDependency { library: String, hint: String },

    /// A subprocess could not be spawned at all, or an output directory
    /// could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;
