//! Entry point resolution and invocation.

use thiserror::Error;

use super::registry::{EntryPoint, EntryPointRegistry};

/// Failure to launch an entry point.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The id does not name a registered entry point.
    #[error("Entry point not found: '{entry}'")]
    Resolution { entry: String },

    /// The entry point ran and failed. Holds its error unchanged.
    #[error(transparent)]
    Execution(anyhow::Error),
}

impl LaunchError {
    /// The entry point's own error, if it ran.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            LaunchError::Execution(cause) => Some(cause),
            LaunchError::Resolution { .. } => None,
        }
    }

    /// Take the entry point's own error, if it ran.
    pub fn into_cause(self) -> Option<anyhow::Error> {
        match self {
            LaunchError::Execution(cause) => Some(cause),
            LaunchError::Resolution { .. } => None,
        }
    }
}

/// Resolves entry points by id and invokes them.
#[derive(Debug)]
pub struct Launcher {
    registry: EntryPointRegistry,
}

impl Launcher {
    /// Create a launcher over `registry`.
    pub fn new(registry: EntryPointRegistry) -> Self {
        Self { registry }
    }

    /// The registry entry points are resolved from.
    pub fn registry(&self) -> &EntryPointRegistry {
        &self.registry
    }

    /// Look up an entry point by id.
    pub fn resolve(&self, entry_id: &str) -> Result<&EntryPoint, LaunchError> {
        if entry_id.trim().is_empty() {
            return Err(LaunchError::Resolution {
                entry: entry_id.to_string(),
            });
        }

        self.registry
            .get(entry_id)
            .ok_or_else(|| LaunchError::Resolution {
                entry: entry_id.to_string(),
            })
    }

    /// Resolve `entry_id` and run it with `args`.
    ///
    /// Blocks until the entry point returns. A panic inside the entry point
    /// is not caught.
    pub fn launch(&self, entry_id: &str, args: &[String]) -> Result<(), LaunchError> {
        tracing::debug!("Resolving entry point '{}'", entry_id);
        let entry = self.resolve(entry_id)?;

        println!("Launching application {} ..", entry_id);
        tracing::info!("Launching application {} with {} argument(s)", entry_id, args.len());

        entry(args).map_err(|cause| {
            tracing::debug!("Entry point '{}' failed: {:#}", entry_id, cause);
            LaunchError::Execution(cause)
        })
    }
}
