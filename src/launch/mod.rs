//! Entry point registry and launching.
//!
//! Applications register their entry points under string ids at startup;
//! the launcher looks one up by the id named in the manifest and invokes it
//! with the process arguments.
//!
//! # Example
//!
//! ```
//! use gatelaunch::launch::{EntryPointRegistry, LaunchError, Launcher};
//!
//! let mut registry = EntryPointRegistry::new();
//! registry.register("demo.main", |args: &[String]| {
//!     anyhow::ensure!(!args.is_empty(), "no arguments given");
//!     Ok(())
//! });
//!
//! let launcher = Launcher::new(registry);
//! assert!(launcher.launch("demo.main", &["x".to_string()]).is_ok());
//!
//! let err = launcher.launch("demo.main", &[]).unwrap_err();
//! assert_eq!(err.to_string(), "no arguments given");
//!
//! let err = launcher.launch("missing", &[]).unwrap_err();
//! assert!(matches!(err, LaunchError::Resolution { .. }));
//! ```

pub mod builtin;
pub mod launcher;
pub mod registry;

pub use builtin::{ExitRequested, ECHO, EXIT};
pub use launcher::{LaunchError, Launcher};
pub use registry::{EntryPoint, EntryPointRegistry};
