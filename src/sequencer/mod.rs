//! Boot sequence orchestration.
//!
//! The sequencer runs a fixed, strictly ordered sequence:
//!
//! 1. runtime check: probe the configured runtime and report its version
//! 2. dependency install: only when the marker directory is absent
//! 3. migration: always
//! 4. launch: blocks for the application's lifetime
//!
//! The first failure aborts the whole sequence; nothing is retried and
//! nothing runs concurrently. The launch step's exit status is recorded
//! but, by default, not judged. See
//! [`BootConfig::forward_launch_exit`](crate::config::BootConfig).

pub mod step;

pub use step::{format_duration, StepReport, StepStatus};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::BootConfig;
use crate::error::{LiftoffError, Result};
use crate::runtime;
use crate::shell::{execute, CommandOptions};
use crate::ui::Output;

/// Outcome of a completed boot sequence.
#[derive(Debug)]
pub struct SequenceReport {
    /// Per-step records, in execution order.
    pub steps: Vec<StepReport>,

    /// Exit status of the launched application (None if killed by signal).
    pub launch_exit: Option<i32>,
}

/// Runs the boot sequence against an explicit configuration and project
/// root, so nothing reads ambient process state.
pub struct Sequencer<'a> {
    config: &'a BootConfig,
    project_root: PathBuf,
}

impl<'a> Sequencer<'a> {
    /// Create a sequencer for a project.
    pub fn new(config: &'a BootConfig, project_root: &Path) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Check whether the dependency marker directory exists.
    ///
    /// Presence is the whole check; the marker is never validated for
    /// completeness.
    pub fn dependencies_present(&self) -> bool {
        self.project_root
            .join(&self.config.dependencies.marker)
            .exists()
    }

    /// Run the full boot sequence, aborting on the first failure.
    pub fn run(&self, out: &Output) -> Result<SequenceReport> {
        let mut steps = Vec::with_capacity(4);

        // 1. Runtime check
        let probe = runtime::probe(&self.config.runtime)?;
        out.message(&format!(
            "{} version: {}",
            self.config.runtime.binary,
            probe.version_output.trim()
        ));
        steps.push(StepReport::completed("runtime", Duration::ZERO, Some(0)));

        // 2. Dependency install (conditional)
        if self.dependencies_present() {
            out.skipped(&format!(
                "install ({} present)",
                self.config.dependencies.marker.display()
            ));
            steps.push(StepReport::skipped("install"));
        } else {
            out.message("Installing dependencies...");
            steps.push(self.run_step("install", &self.config.dependencies.install, out)?);
        }

        // 3. Migration
        out.message("Running database migrations...");
        steps.push(self.run_step("migrate", &self.config.commands.migrate, out)?);

        // 4. Launch, blocking until the application itself exits
        out.message("Starting application...");
        let launch = self.launch()?;
        steps.push(if launch.success {
            StepReport::completed("launch", launch.duration, launch.exit_code)
        } else {
            StepReport::failed("launch", launch.duration, launch.exit_code)
        });

        Ok(SequenceReport {
            steps,
            launch_exit: launch.exit_code,
        })
    }

    /// Run an install/migrate step, propagating a non-zero exit as
    /// [`LiftoffError::StepFailed`].
    fn run_step(&self, name: &'static str, command: &str, out: &Output) -> Result<StepReport> {
        tracing::debug!("running step '{}': {}", name, command);

        let capture = out.mode().captures_step_output();
        let spinner = capture.then(|| out.spinner(name));

        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        };
        let result = execute(command, &options)?;

        if result.success {
            if let Some(spinner) = spinner {
                spinner.finish_success(name);
            }
            return Ok(StepReport::completed(name, result.duration, result.exit_code));
        }

        if let Some(spinner) = spinner {
            spinner.finish_error(name);
        }
        if capture {
            // Captured output is only interesting once the step has failed
            eprint!("{}", result.stdout);
            eprint!("{}", result.stderr);
        }

        Err(LiftoffError::StepFailed {
            step: name.to_string(),
            code: result.exit_code.unwrap_or(1),
        })
    }

    /// Launch the application with inherited stdio, blocking until it exits.
    fn launch(&self) -> Result<crate::shell::CommandResult> {
        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            capture_stdout: false,
            capture_stderr: false,
            ..Default::default()
        };
        execute(&self.config.commands.start, &options)
    }
}
