//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show data lines, decorations, and a scan summary.
    Verbose,
    /// Show data lines and warnings only.
    #[default]
    Normal,
    /// Show data lines and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status decorations.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows per-scan summaries.
    pub fn shows_summary(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
