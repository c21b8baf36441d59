//! Settings shared by commands that need the manifest and runtime version.

use std::path::{Path, PathBuf};

use crate::config::{discover_manifest, load_manifest, AppManifest, MANIFEST_CANDIDATES};
use crate::error::{GatelaunchError, Result};
use crate::ui::VersionFailure;
use crate::version::{RuntimeProbe, RuntimeVersion};

/// Global options resolved once per invocation.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    working_dir: PathBuf,
    manifest_path: Option<PathBuf>,
    runtime_version: Option<String>,
}

impl LaunchContext {
    /// Create a context rooted at `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            manifest_path: None,
            runtime_version: None,
        }
    }

    /// Use an explicit manifest path instead of discovery.
    pub fn with_manifest(mut self, path: Option<PathBuf>) -> Self {
        self.manifest_path = path;
        self
    }

    /// Use an explicit current runtime version instead of probing.
    pub fn with_runtime_version(mut self, version: Option<String>) -> Self {
        self.runtime_version = version;
        self
    }

    /// Directory manifests are discovered in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Locate the manifest file.
    pub fn manifest_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.manifest_path {
            return Ok(if path.is_absolute() {
                path.clone()
            } else {
                self.working_dir.join(path)
            });
        }

        discover_manifest(&self.working_dir).ok_or_else(|| GatelaunchError::ConfigNotFound {
            path: self.working_dir.join(MANIFEST_CANDIDATES[0]),
        })
    }

    /// Load the manifest and apply command-line overrides.
    pub fn load_manifest(
        &self,
        entry_point: Option<String>,
        min_version: Option<String>,
    ) -> Result<AppManifest> {
        let path = self.manifest_path()?;
        load_manifest(&path)?
            .with_overrides(entry_point, min_version)
            .validate()
    }

    /// Determine the current runtime version for `manifest`.
    pub fn current_version(&self, manifest: &AppManifest) -> Result<RuntimeVersion> {
        RuntimeProbe::new(self.runtime_version.clone(), manifest.runtime_command()).detect()
    }
}

/// Build the presentation data for a failed gate.
pub fn version_failure(manifest: &AppManifest, current: &str) -> VersionFailure {
    VersionFailure {
        current: current.to_string(),
        required: manifest.min_version.clone(),
        runtime_name: manifest.runtime_display_name(),
        download_url: manifest.download_link(),
    }
}
