//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::cli::context::LaunchContext;
use crate::error::Result;
use crate::launch::Launcher;
use crate::ui::ErrorPresenter;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - Presenter for displaying output and failures
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn ErrorPresenter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit code for the process; codes outside `0..=255` become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug)]
pub struct CommandDispatcher {
    context: LaunchContext,
    launcher: Launcher,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: LaunchContext, launcher: Launcher) -> Self {
        Self { context, launcher }
    }

    /// Get the launch context.
    pub fn context(&self) -> &LaunchContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand, runs with the top-level
    /// run arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn ErrorPresenter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.context, &self.launcher, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.launcher.registry(), args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::run::RunCommand::new(&self.context, &self.launcher, cli.run.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::EntryPointRegistry;
    use crate::ui::{Locale, MockPresenter};
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn process_exit_code_does_not_truncate() {
        assert_eq!(CommandResult::success().process_exit_code(), 0);
        assert_eq!(CommandResult::failure(2).process_exit_code(), 2);
        assert_eq!(CommandResult::failure(255).process_exit_code(), 255);
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(
            LaunchContext::new(PathBuf::from("/test")),
            Launcher::new(EntryPointRegistry::new()),
        );
        assert_eq!(dispatcher.context().working_dir(), Path::new("/test"));
    }

    #[test]
    fn dispatch_list_routes_to_registry() {
        let dispatcher = CommandDispatcher::new(
            LaunchContext::new(PathBuf::from("/test")),
            Launcher::new(EntryPointRegistry::new().with("app.main", |_: &[String]| Ok(()))),
        );
        let cli = Cli::parse_from(["gatelaunch", "list"]);
        let mut ui = MockPresenter::new(Locale::En);

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("app.main"));
    }
}
