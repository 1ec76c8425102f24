//! Output mode and writer.

use std::str::FromStr;

use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, LiftoffTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pass through all child output and show every status line.
    Verbose,
    /// Pass through child output with progress messages.
    #[default]
    Normal,
    /// Capture step output behind spinners; replay it only on failure.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows progress messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if step commands run with captured (rather than inherited) stdio.
    pub fn captures_step_output(&self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    interactive: bool,
    theme: LiftoffTheme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode, interactive: bool) -> Self {
        let theme = if should_use_colors() {
            LiftoffTheme::new()
        } else {
            LiftoffTheme::plain()
        };
        Self {
            mode,
            interactive,
            theme,
        }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check if spinners may be drawn.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Write a progress message if the mode allows status output.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    /// Write a skipped line if the mode allows status output.
    pub fn skipped(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }

    /// Write an error line to stderr. Always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Start a spinner for a captured step.
    ///
    /// Hidden when the terminal is non-interactive so log-based
    /// environments don't fill with tick frames.
    pub fn spinner(&self, msg: &str) -> ProgressSpinner {
        if self.interactive {
            ProgressSpinner::new(msg)
        } else {
            ProgressSpinner::hidden()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_captures_in_quiet_only() {
        assert!(!OutputMode::Verbose.captures_step_output());
        assert!(!OutputMode::Normal.captures_step_output());
        assert!(OutputMode::Quiet.captures_step_output());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn output_new_and_mode() {
        let output = Output::new(OutputMode::Quiet, false);
        assert_eq!(output.mode(), OutputMode::Quiet);
        assert!(!output.is_interactive());
    }

    #[test]
    fn non_interactive_spinner_is_hidden() {
        let output = Output::new(OutputMode::Quiet, false);
        let spinner = output.spinner("working");
        assert!(spinner.is_hidden());
    }
}
