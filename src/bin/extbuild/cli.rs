//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// extbuild - build orchestrator for a native extension module
#[derive(Parser)]
#[command(name = "extbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the extension module (staged and in place)
    Build(BuildArgs),

    /// Remove previously built module files
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Project directory holding the module sources (defaults to cwd)
    pub path: Option<PathBuf>,

    /// Build with the SIMD-accelerated CPU backend
    #[arg(long)]
    pub with_simd: bool,

    /// Build with the GPU-accelerated backend
    #[arg(long)]
    pub with_gpu: bool,

    /// Compiler to use (overrides CC and auto-detection)
    #[arg(long, env = "CC")]
    pub cc: Option<PathBuf>,

    /// Build directory override (default: <project>/build)
    #[arg(long)]
    pub build_dir: Option<PathBuf>,

    /// Module name (defaults to the project directory name)
    #[arg(long)]
    pub module_name: Option<String>,

    /// Show the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the preflight library checks
    #[arg(long)]
    pub skip_preflight: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Project directory holding the module sources (defaults to cwd)
    pub path: Option<PathBuf>,

    /// Compiler to use (overrides CC and auto-detection)
    #[arg(long, env = "CC")]
    pub cc: Option<PathBuf>,

    /// Build directory override (default: <project>/build)
    #[arg(long)]
    pub build_dir: Option<PathBuf>,

    /// Module name (defaults to the project directory name)
    #[arg(long)]
    pub module_name: Option<String>,

    /// Show what would be removed without removing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
