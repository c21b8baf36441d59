//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gatelaunch - Check the runtime version, then launch the application.
#[derive(Debug, Parser)]
#[command(name = "gatelaunch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to the manifest (overrides discovery in the current directory)
    #[arg(short, long, global = true, env = "GATELAUNCH_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Use this as the current runtime version instead of probing
    #[arg(long, global = true, env = "GATELAUNCH_RUNTIME_VERSION")]
    pub runtime_version: Option<String>,

    /// Message language (e.g. en, fr); defaults to LC_ALL/LC_MESSAGES/LANG
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Arguments for the default `run` command
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the runtime version and launch the entry point (default)
    Run(RunArgs),

    /// Only check the runtime version against the minimum
    Check(CheckArgs),

    /// List registered entry points
    List(ListArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Entry point to launch (overrides the manifest)
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Minimum runtime version (overrides the manifest)
    #[arg(long, value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Arguments forwarded unchanged to the entry point
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Minimum runtime version (overrides the manifest)
    #[arg(long, value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
