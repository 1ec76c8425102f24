//! The `completions` command: generate shell completion scripts.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Writes a completion script for the requested shell to stdout.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _out: &Output) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        generate(self.args.shell, &mut cmd, "liftoff", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
