//! gatelaunch - Runtime version gatekeeper and indirect application launcher.
//!
//! gatelaunch checks that the hosting runtime meets a minimum version and,
//! if it does, launches an entry point looked up by name, forwarding the
//! process arguments. Failures raised by the entry point reach the caller
//! unchanged.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest discovery and loading
//! - [`error`] - Error types and result aliases
//! - [`launch`] - Entry point registry and launcher
//! - [`ui`] - Localized error presentation
//! - [`version`] - Version values, the version gate, and runtime probing
//!
//! # Example
//!
//! ```
//! use gatelaunch::launch::{EntryPointRegistry, Launcher};
//! use gatelaunch::version::check_version;
//!
//! let registry = EntryPointRegistry::new().with("demo.main", |args: &[String]| {
//!     assert_eq!(args, ["--verbose".to_string()]);
//!     Ok(())
//! });
//!
//! if check_version("11.0.2", "1.8.0_40").is_pass() {
//!     Launcher::new(registry)
//!         .launch("demo.main", &["--verbose".to_string()])
//!         .unwrap();
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
pub mod ui;
pub mod version;

pub use error::{GatelaunchError, Result};
