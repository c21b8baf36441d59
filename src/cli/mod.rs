//! Command-line interface for gatelaunch.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`context`] - Manifest and runtime version settings shared by commands

pub mod args;
pub mod commands;
pub mod context;

pub use args::{CheckArgs, Cli, Commands, ListArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use context::LaunchContext;
