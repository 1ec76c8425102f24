//! Boot step status and reporting.

use std::time::Duration;

/// Status of a step in the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step completed successfully.
    Completed,

    /// Step failed.
    Failed,

    /// Step was skipped (dependency marker already present).
    Skipped,
}

impl StepStatus {
    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
            StepStatus::Skipped => '○',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Record of a single executed (or skipped) boot step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name.
    pub name: &'static str,

    /// Final status.
    pub status: StepStatus,

    /// Execution duration (zero for skipped steps).
    pub duration: Duration,

    /// Exit code of the step's command, when one ran.
    pub exit_code: Option<i32>,
}

impl StepReport {
    /// Create a completed report.
    pub fn completed(name: &'static str, duration: Duration, exit_code: Option<i32>) -> Self {
        Self {
            name,
            status: StepStatus::Completed,
            duration,
            exit_code,
        }
    }

    /// Create a failed report.
    pub fn failed(name: &'static str, duration: Duration, exit_code: Option<i32>) -> Self {
        Self {
            name,
            status: StepStatus::Failed,
            duration,
            exit_code,
        }
    }

    /// Create a skipped report.
    pub fn skipped(name: &'static str) -> Self {
        Self {
            name,
            status: StepStatus::Skipped,
            duration: Duration::ZERO,
            exit_code: None,
        }
    }

    /// Generate a summary line for display.
    pub fn summary_line(&self) -> String {
        match self.status {
            StepStatus::Completed => format!(
                "{} {} ({})",
                self.status.display_char(),
                self.name,
                format_duration(self.duration)
            ),
            StepStatus::Skipped => {
                format!("{} {} (skipped)", self.status.display_char(), self.name)
            }
            StepStatus::Failed => format!(
                "{} {} (exit code {})",
                self.status.display_char(),
                self.name,
                self.exit_code.unwrap_or(1)
            ),
        }
    }
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
