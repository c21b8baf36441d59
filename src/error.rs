//! Error types for gatelaunch operations.
//!
//! This module defines [`GatelaunchError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GatelaunchError` for failures the launcher itself produces
//! - Entry point failures travel as [`LaunchError::Execution`] and keep the
//!   entry point's own `anyhow::Error` untouched
//! - Malformed version components are never errors; they are skipped

use std::path::PathBuf;
use thiserror::Error;

use crate::launch::{ExitRequested, LaunchError};

/// Core error type for gatelaunch operations.
#[derive(Debug, Error)]
pub enum GatelaunchError {
    /// No manifest file was found.
    #[error("Manifest not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest parsed but holds invalid values.
    #[error("Invalid manifest: {message}")]
    ConfigValidationError { message: String },

    /// The running runtime is older than the manifest requires.
    #[error("Runtime version {current} is lower than the required {required}")]
    VersionTooLow { current: String, required: String },

    /// The configured runtime probe could not produce a version.
    #[error("Failed to probe runtime version with '{command}': {message}")]
    RuntimeProbeFailed { command: String, message: String },

    /// A version extraction pattern does not compile.
    #[error("Invalid version pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Entry point resolution or execution failed.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatelaunchError {
    /// Whether this error comes from configuration rather than the runtime.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::InvalidPattern { .. }
                | Self::Launch(LaunchError::Resolution { .. })
        )
    }

    /// Exit code carried by an entry point that failed with [`ExitRequested`].
    pub fn requested_exit(&self) -> Option<i32> {
        match self {
            Self::Launch(LaunchError::Execution(cause)) => {
                cause.downcast_ref::<ExitRequested>().map(|e| e.code)
            }
            _ => None,
        }
    }

    /// Process exit code for this error.
    ///
    /// 2 for configuration and resolution problems, the requested code for
    /// [`ExitRequested`] (1 if it does not fit in a `u8`), otherwise 1.
    pub fn exit_code(&self) -> u8 {
        if let Some(code) = self.requested_exit() {
            return u8::try_from(code).unwrap_or(1);
        }
        if self.is_configuration() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for gatelaunch operations.
pub type Result<T> = std::result::Result<T, GatelaunchError>;
