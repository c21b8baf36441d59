//! Current runtime version discovery.
//!
//! The version of the hosting runtime comes from, in priority order:
//!
//! 1. An explicit override (`--runtime-version` or `GATELAUNCH_RUNTIME_VERSION`)
//! 2. The output of the manifest's runtime probe command (default `java -version`)
//!
//! # Example
//!
//! ```
//! use gatelaunch::config::RuntimeCommand;
//! use gatelaunch::version::{RuntimeProbe, VersionSource};
//!
//! let probe = RuntimeProbe::new(Some("11.0.2".to_string()), RuntimeCommand::java());
//! let detected = probe.detect().unwrap();
//! assert_eq!(detected.version, "11.0.2");
//! assert_eq!(detected.source, VersionSource::Override);
//! ```

use regex::Regex;
use serde::Serialize;
use std::process::Command;

use crate::config::RuntimeCommand;
use crate::error::{GatelaunchError, Result};

/// Pattern used when the runtime command sets none.
///
/// Matches things like `1.8.0_101`, `11.0.2`, `9-ea`. It takes the first
/// version-looking run anywhere in the output, so the Java probe uses
/// [`JAVA_VERSION_PATTERN`](crate::config::JAVA_VERSION_PATTERN) instead.
pub const DEFAULT_VERSION_PATTERN: &str = r"(\d+(?:[._]\d+)*(?:-[A-Za-z0-9]+)?)";

/// Where a detected version came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// Given on the command line or in the environment.
    Override,
    /// Extracted from the named probe command's output.
    Command(String),
}

/// A detected runtime version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeVersion {
    /// Raw version string, unparsed.
    pub version: String,
    /// How it was obtained.
    pub source: VersionSource,
}

/// Looks up the version of the hosting runtime.
#[derive(Debug, Clone)]
pub struct RuntimeProbe {
    override_version: Option<String>,
    runtime: RuntimeCommand,
}

impl RuntimeProbe {
    /// Create a probe. A non-blank `override_version` short-circuits the command.
    pub fn new(override_version: Option<String>, runtime: RuntimeCommand) -> Self {
        let override_version = override_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self {
            override_version,
            runtime,
        }
    }

    /// Determine the current runtime version.
    pub fn detect(&self) -> Result<RuntimeVersion> {
        if let Some(version) = &self.override_version {
            tracing::debug!("Using runtime version override {}", version);
            return Ok(RuntimeVersion {
                version: version.clone(),
                source: VersionSource::Override,
            });
        }

        let command = self.runtime.display_command();
        tracing::debug!("Probing runtime version with '{}'", command);

        let output = Command::new(&self.runtime.command)
            .args(&self.runtime.args)
            .output()
            .map_err(|e| GatelaunchError::RuntimeProbeFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        // `java -version` writes to stderr, most other tools to stdout
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push('\n');
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            tracing::warn!("'{}' exited with {}", command, output.status);
        }

        let pattern = self.runtime.version_pattern();

        match extract_version(&combined, pattern)? {
            Some(version) => {
                tracing::debug!("Detected runtime version {}", version);
                Ok(RuntimeVersion {
                    version,
                    source: VersionSource::Command(command),
                })
            }
            None => Err(GatelaunchError::RuntimeProbeFailed {
                command,
                message: format!("no version found in output (exit status {})", output.status),
            }),
        }
    }
}

/// Pull the first version-looking match out of `output`.
///
/// Uses the first capture group if the pattern has one, else the whole match.
pub fn extract_version(output: &str, pattern: &str) -> Result<Option<String>> {
    let re = Regex::new(pattern).map_err(|e| GatelaunchError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    Ok(re.captures(output).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
    }))
}
