//! The `check` command: report boot readiness without booting.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config;
use crate::error::{LiftoffError, Result};
use crate::runtime;
use crate::sequencer::Sequencer;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Probes the runtime and reports dependency-marker presence. Never
/// installs, migrates, or launches anything.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    #[allow(dead_code)]
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let config = config::load(&self.project_root, self.config_path.as_deref())?;

        match runtime::probe(&config.runtime) {
            Ok(probe) => {
                let version = probe
                    .version
                    .unwrap_or_else(|| probe.version_output.trim().to_string());
                out.success(&format!(
                    "{} {} ({})",
                    config.runtime.binary,
                    version,
                    probe.binary_path.display()
                ));
            }
            Err(e @ LiftoffError::RuntimeMissing { .. }) => {
                out.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        }

        let sequencer = Sequencer::new(&config, &self.project_root);
        if sequencer.dependencies_present() {
            out.success(&format!(
                "dependencies installed ({} present)",
                config.dependencies.marker.display()
            ));
        } else {
            out.message(&format!(
                "dependencies missing ({} not found); `liftoff up` will run: {}",
                config.dependencies.marker.display(),
                config.dependencies.install
            ));
        }

        Ok(CommandResult::success())
    }
}
