//! Minimum version gate.

use serde::Serialize;

use super::value::is_at_least;
use crate::error::GatelaunchError;

/// Outcome of comparing the current runtime version against the minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GateResult {
    /// The current version meets the minimum.
    Pass,
    /// The current version is below the minimum.
    Fail {
        /// Version reported by the running runtime.
        current: String,
        /// Minimum version the application asks for.
        required: String,
    },
}

impl GateResult {
    /// Whether the gate let the run through.
    pub fn is_pass(&self) -> bool {
        matches!(self, GateResult::Pass)
    }

    /// Convert a failed gate into [`GatelaunchError::VersionTooLow`].
    ///
    /// Returns `None` for [`GateResult::Pass`].
    pub fn into_error(self) -> Option<GatelaunchError> {
        match self {
            GateResult::Pass => None,
            GateResult::Fail { current, required } => {
                Some(GatelaunchError::VersionTooLow { current, required })
            }
        }
    }
}

/// Compare `current` against `required`.
///
/// The minimum is inclusive. Presentation and process termination on
/// failure are left to the caller.
pub fn check_version(current: &str, required: &str) -> GateResult {
    if is_at_least(current, required) {
        GateResult::Pass
    } else {
        GateResult::Fail {
            current: current.to_string(),
            required: required.to_string(),
        }
    }
}
