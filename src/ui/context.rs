use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Print per-pass summary lines to stderr
    pub summary: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &astrodb::Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &astrodb::Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            verbose,
            caps,
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
            summary: !json && (verbose > 0 || config.output.summary),
        }
    }

    /// GitHub Actions workflow annotations are only written in text mode.
    pub fn annotate(&self) -> bool {
        !self.json && self.caps.is_github_actions
    }

    pub fn info(&self, message: impl std::fmt::Display) {
        if !self.json && self.verbose > 0 {
            eprintln!("[INFO] {}", message);
        }
    }

    pub fn debug(&self, message: impl std::fmt::Display) {
        if !self.json && self.verbose > 1 {
            eprintln!("[DEBUG] {}", message);
        }
    }
}
