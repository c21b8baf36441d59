//! Visual theme and styling.

use console::{Style, Term};

/// gatelaunch's visual theme.
#[derive(Debug, Clone)]
pub struct GateTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error titles and messages (red bold).
    pub error: Style,
    /// Style for secondary text such as the download hint.
    pub dim: Style,
    /// Style for links (cyan underlined).
    pub link: Style,
}

impl Default for GateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GateTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            link: Style::new().cyan().underlined(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            link: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format secondary text.
    pub fn format_dim(&self, text: &str) -> String {
        format!("{}", self.dim.apply_to(text))
    }

    /// Format a failure title.
    pub fn format_title(&self, title: &str) -> String {
        format!("{}", self.error.apply_to(title))
    }
}

/// Check if colors should be enabled for `term`.
pub fn should_use_colors(term: &Term) -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    term.is_term()
}
