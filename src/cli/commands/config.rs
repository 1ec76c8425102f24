//! The `config` command: print the resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config;
use crate::error::Result;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Prints the configuration after defaults and the config file have been
/// merged, as YAML or JSON.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, _out: &Output) -> Result<CommandResult> {
        let config = config::load(&self.project_root, self.config_path.as_deref())?;

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?
        } else {
            serde_yaml::to_string(&config).map_err(anyhow::Error::from)?
        };
        println!("{}", rendered.trim_end());

        Ok(CommandResult::success())
    }
}
