//! Run command implementation.
//!
//! The `gatelaunch run` command checks the runtime version and, if it meets
//! the minimum, launches the manifest's entry point with the forwarded
//! arguments. It is also what runs when no subcommand is given.

use crate::cli::args::RunArgs;
use crate::cli::context::{version_failure, LaunchContext};
use crate::error::Result;
use crate::launch::Launcher;
use crate::ui::ErrorPresenter;
use crate::version::{check_version, GateResult};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    context: &'a LaunchContext,
    launcher: &'a Launcher,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(context: &'a LaunchContext, launcher: &'a Launcher, args: RunArgs) -> Self {
        Self {
            context,
            launcher,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn ErrorPresenter) -> Result<CommandResult> {
        let manifest = self
            .context
            .load_manifest(self.args.entry.clone(), self.args.min_version.clone())?;
        let current = self.context.current_version(&manifest)?;

        match check_version(&current.version, &manifest.min_version) {
            GateResult::Fail { current, required } => {
                tracing::debug!("Gate failed: {} < {}; not resolving entry point", current, required);
                ui.present_version_failure(&version_failure(&manifest, &current));
                return Ok(CommandResult::failure(1));
            }
            GateResult::Pass => {
                tracing::debug!(
                    "Gate passed: {} >= {}",
                    current.version,
                    manifest.min_version
                );
            }
        }

        self.launcher
            .launch(&manifest.entry_point, &self.args.args)?;

        tracing::debug!("Entry point '{}' completed", manifest.entry_point);
        Ok(CommandResult::success())
    }
}
