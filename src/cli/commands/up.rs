//! The `up` command: run the full boot sequence.

use std::path::{Path, PathBuf};

use crate::cli::args::UpArgs;
use crate::config;
use crate::sequencer::Sequencer;
use crate::ui::Output;

use super::{Command, CommandResult};
use crate::error::Result;

/// Runs the boot sequence: runtime check, conditional install, migration,
/// launch.
pub struct UpCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: UpArgs,
}

impl UpCommand {
    /// Create a new up command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: UpArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for UpCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let config = config::load(&self.project_root, self.config_path.as_deref())?;
        let forward = self.args.forward_exit || config.forward_launch_exit;

        let sequencer = Sequencer::new(&config, &self.project_root);
        match sequencer.run(out) {
            Ok(report) => {
                // The launch call has returned, so the application itself
                // has exited. Whether that counts as our failure is a
                // configuration choice.
                if forward {
                    let code = report.launch_exit.unwrap_or(1);
                    if code != 0 {
                        return Ok(CommandResult::failure(code));
                    }
                }
                Ok(CommandResult::success())
            }
            Err(e) => {
                out.error(&format!("Error: {}", e));
                Ok(CommandResult::failure(e.exit_code()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_output() -> Output {
        Output::new(OutputMode::Quiet, false)
    }

    #[cfg(unix)]
    fn write_config(dir: &Path, start: &str) {
        let config = format!(
            r#"
runtime:
  binary: /bin/sh
  version_args: ["-c", "echo v1.0.0"]
dependencies:
  marker: deps
  install: "true"
commands:
  migrate: "true"
  start: "{start}"
"#
        );
        fs::write(dir.join(config::CONFIG_FILE), config).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn launch_exit_is_not_forwarded_by_default() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "exit 5");

        let cmd = UpCommand::new(temp.path(), None, UpArgs::default());
        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn forward_exit_flag_propagates_launch_status() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "exit 5");

        let cmd = UpCommand::new(temp.path(), None, UpArgs { forward_exit: true });
        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 5);
    }

    #[test]
    fn missing_runtime_maps_to_exit_one() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(config::CONFIG_FILE),
            "runtime:\n  binary: definitely-not-a-real-runtime-binary\n",
        )
        .unwrap();

        let cmd = UpCommand::new(temp.path(), None, UpArgs::default());
        let result = cmd.execute(&quiet_output()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}
