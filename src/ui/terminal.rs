//! Terminal presenter.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ErrorPresenter, GateTheme, Locale, MessageCatalog, VersionFailure};

/// Wrap `label` in an OSC 8 terminal hyperlink to `url`.
pub fn hyperlink(url: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

/// Presenter writing messages to stdout and failures to stderr.
pub struct TerminalPresenter {
    out: Term,
    err: Term,
    theme: GateTheme,
    catalog: MessageCatalog,
    clickable: bool,
}

impl TerminalPresenter {
    /// Create a presenter for `locale`, styling only when stderr is a TTY.
    pub fn new(locale: Locale) -> Self {
        let err = Term::stderr();
        let styled = should_use_colors(&err);
        let theme = if styled {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err,
            theme,
            catalog: MessageCatalog::new(locale),
            clickable: styled,
        }
    }

    /// The message catalog in use.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    fn render_link(&self, url: &str) -> String {
        if self.clickable {
            format!("{}", self.theme.link.apply_to(hyperlink(url, url)))
        } else {
            url.to_string()
        }
    }
}

impl ErrorPresenter for TerminalPresenter {
    fn present_version_failure(&mut self, failure: &VersionFailure) {
        tracing::debug!(
            "Presenting version failure: current={}, required={}",
            failure.current,
            failure.required
        );

        writeln!(self.err, "{}", self.theme.format_title(self.catalog.title())).ok();
        for line in self.catalog.body_lines(failure) {
            writeln!(self.err, "{}", line).ok();
        }
        if let Some(url) = &failure.download_url {
            let link = self.render_link(url);
            let hint = self.theme.format_dim(self.catalog.download_hint());
            writeln!(self.err, "{} {}", hint, link).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperlink_wraps_label() {
        let link = hyperlink("https://example.com", "download");
        assert!(link.starts_with("\x1b]8;;https://example.com\x1b\\"));
        assert!(link.contains("download"));
        assert!(link.ends_with("\x1b]8;;\x1b\\"));
    }

    #[test]
    fn terminal_presenter_creation() {
        let ui = TerminalPresenter::new(Locale::Fr);
        assert_eq!(ui.catalog().locale(), Locale::Fr);
    }

    #[test]
    fn plain_link_when_not_clickable() {
        let mut ui = TerminalPresenter::new(Locale::En);
        ui.clickable = false;
        assert_eq!(ui.render_link("https://example.com"), "https://example.com");
    }
}
