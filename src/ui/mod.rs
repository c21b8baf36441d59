//! User-facing output.
//!
//! This module provides:
//! - [`ErrorPresenter`] trait for output abstraction
//! - [`TerminalPresenter`] writing styled text to the terminal
//! - [`MockPresenter`] capturing output for tests
//! - [`MessageCatalog`] with localized version-failure texts
//!
//! # Example
//!
//! ```
//! use gatelaunch::ui::{ErrorPresenter, Locale, MockPresenter, VersionFailure};
//!
//! let mut ui = MockPresenter::new(Locale::En);
//! ui.present_version_failure(&VersionFailure {
//!     current: "1.7.0_80".to_string(),
//!     required: "1.8.0_40".to_string(),
//!     runtime_name: "Java".to_string(),
//!     download_url: None,
//! });
//! assert_eq!(ui.version_failures().len(), 1);
//! ```

pub mod messages;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use messages::{Locale, MessageCatalog};
pub use mock::MockPresenter;
pub use terminal::{hyperlink, TerminalPresenter};
pub use theme::{should_use_colors, GateTheme};

/// Everything needed to tell a user their runtime is too old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFailure {
    /// Version the runtime reported.
    pub current: String,
    /// Minimum version the application needs.
    pub required: String,
    /// Runtime name shown to the user (e.g., "Java").
    pub runtime_name: String,
    /// Where a newer runtime can be downloaded.
    pub download_url: Option<String>,
}

/// Trait for presenting launcher output and failures.
///
/// This trait allows mocking the output in tests.
pub trait ErrorPresenter {
    /// Tell the user the runtime failed the version gate.
    fn present_version_failure(&mut self, failure: &VersionFailure);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display an informational message on stdout.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);
}
