//! Registry of launchable entry points.
//!
//! The registry maps string ids to callables. It is populated once at
//! startup and only read afterwards.

use std::collections::HashMap;
use std::fmt;

/// An application entry point.
///
/// Receives the process arguments and either returns normally or fails with
/// its own error.
pub type EntryPoint = Box<dyn Fn(&[String]) -> anyhow::Result<()>>;

/// Registry of all known entry points.
#[derive(Default)]
pub struct EntryPointRegistry {
    entries: HashMap<String, EntryPoint>,
}

impl EntryPointRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in entry points.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::builtin::register_builtins(&mut registry);
        registry
    }

    /// Register an entry point, replacing any previous one with the same id.
    pub fn register<F>(&mut self, id: impl Into<String>, entry: F)
    where
        F: Fn(&[String]) -> anyhow::Result<()> + 'static,
    {
        let id = id.into();
        if self.entries.insert(id.clone(), Box::new(entry)).is_some() {
            tracing::warn!("Entry point '{}' registered twice; keeping the latest", id);
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, id: impl Into<String>, entry: F) -> Self
    where
        F: Fn(&[String]) -> anyhow::Result<()> + 'static,
    {
        self.register(id, entry);
        self
    }

    /// Look up an entry point by id.
    pub fn get(&self, id: &str) -> Option<&EntryPoint> {
        self.entries.get(id)
    }

    /// Check if an entry point exists.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered entry points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry points are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for EntryPointRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPointRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}
