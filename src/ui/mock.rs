//! Mock presenter implementation for testing.
//!
//! `MockPresenter` implements the `ErrorPresenter` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use gatelaunch::ui::{ErrorPresenter, Locale, MockPresenter};
//!
//! let mut ui = MockPresenter::new(Locale::En);
//! ui.message("Starting");
//! ui.error("Something broke");
//!
//! assert!(ui.has_message("Starting"));
//! assert!(ui.has_error("broke"));
//! ```

use super::{ErrorPresenter, Locale, MessageCatalog, VersionFailure};

/// Mock presenter implementation for testing.
#[derive(Debug, Default)]
pub struct MockPresenter {
    catalog: MessageCatalog,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    version_failures: Vec<VersionFailure>,
    rendered_failures: Vec<String>,
}

impl MockPresenter {
    /// Create a new MockPresenter rendering texts for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            catalog: MessageCatalog::new(locale),
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all version failures that were presented.
    pub fn version_failures(&self) -> &[VersionFailure] {
        &self.version_failures
    }

    /// Get the localized text of each presented version failure.
    pub fn rendered_failures(&self) -> &[String] {
        &self.rendered_failures
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl ErrorPresenter for MockPresenter {
    fn present_version_failure(&mut self, failure: &VersionFailure) {
        self.rendered_failures
            .push(self.catalog.version_too_low(failure));
        self.version_failures.push(failure.clone());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_and_errors() {
        let mut ui = MockPresenter::new(Locale::En);
        ui.message("hello");
        ui.success("done");
        ui.error("oops");

        assert_eq!(ui.messages(), ["hello".to_string()]);
        assert!(ui.has_success("done"));
        assert!(ui.has_error("oops"));
        assert!(!ui.has_message("missing"));
    }

    #[test]
    fn renders_failures_in_locale() {
        let mut ui = MockPresenter::new(Locale::Fr);
        ui.present_version_failure(&VersionFailure {
            current: "1.6".to_string(),
            required: "1.8".to_string(),
            runtime_name: "Java".to_string(),
            download_url: None,
        });

        assert_eq!(ui.version_failures()[0].current, "1.6");
        assert!(ui.rendered_failures()[0].contains("n'est pas à jour"));
    }
}
