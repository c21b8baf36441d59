//! List command implementation.
//!
//! The `gatelaunch list` command lists the registered entry points.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::launch::EntryPointRegistry;
use crate::ui::ErrorPresenter;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a EntryPointRegistry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a EntryPointRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn ErrorPresenter) -> Result<CommandResult> {
        let ids = self.registry.ids();

        if self.args.json {
            let json = serde_json::to_string_pretty(&ids).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else if ids.is_empty() {
            ui.message("No entry points registered.");
        } else {
            for id in ids {
                ui.message(id);
            }
        }

        Ok(CommandResult::success())
    }
}
