//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing progress through `out`.
    fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// With no subcommand, `up` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Up(args)) => {
                let cmd = super::up::UpCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(out)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(out)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::up::UpCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    crate::cli::args::UpArgs::default(),
                );
                cmd.execute(out)
            }
        }
    }
}
