//! Check command implementation.
//!
//! The `gatelaunch check` command runs only the version gate and reports the
//! outcome without launching anything.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::cli::context::{version_failure, LaunchContext};
use crate::error::Result;
use crate::ui::ErrorPresenter;
use crate::version::{check_version, version_value, GateResult, VersionSource};

use super::dispatcher::{Command, CommandResult};

/// JSON report for `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub current: String,
    pub required: String,
    pub current_value: f64,
    pub required_value: f64,
    pub source: VersionSource,
    pub pass: bool,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a LaunchContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a LaunchContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn ErrorPresenter) -> Result<CommandResult> {
        let manifest = self
            .context
            .load_manifest(None, self.args.min_version.clone())?;
        let detected = self.context.current_version(&manifest)?;
        let gate = check_version(&detected.version, &manifest.min_version);
        let pass = gate.is_pass();

        if self.args.json {
            let report = CheckReport {
                current_value: version_value(&detected.version),
                required_value: version_value(&manifest.min_version),
                current: detected.version,
                required: manifest.min_version.clone(),
                source: detected.source,
                pass,
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            match &gate {
                GateResult::Pass => ui.success(&format!(
                    "{} {} meets the minimum {}",
                    manifest.runtime_display_name(),
                    detected.version,
                    manifest.min_version
                )),
                GateResult::Fail { current, .. } => {
                    ui.present_version_failure(&version_failure(&manifest, current))
                }
            }
        }

        Ok(if pass {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
