//! Visual theme and styling.

use console::Style;

/// Labscan's visual theme.
#[derive(Debug, Clone)]
pub struct LabscanTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for LabscanTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LabscanTheme {
    /// Create the default labscan theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = LabscanTheme::plain();
        let msg = theme.format_success("All reports present");
        assert!(msg.contains('✓'));
        assert!(msg.contains("All reports present"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = LabscanTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains('⚠'));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = LabscanTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains('✗'));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_theme_creates_without_panic() {
        let theme = LabscanTheme::plain();
        let _ = theme.format_success("test");
    }

    #[test]
    fn theme_constructors_do_not_panic() {
        let _ = LabscanTheme::default();
        let _ = LabscanTheme::new();
    }
}
