//! Configuration schema.
//!
//! A project may carry a `liftoff.yml` describing its runtime, dependency
//! marker, and boot commands. Every key is optional; the defaults
//! reproduce a plain Node.js service booted with npm.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{LiftoffError, Result};

/// Resolved boot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Runtime to probe for before anything else runs.
    pub runtime: RuntimeConfig,

    /// Dependency marker and install command.
    pub dependencies: DependencyConfig,

    /// Migration and start commands.
    pub commands: CommandConfig,

    /// Forward the launched application's exit status as our own.
    ///
    /// Off by default: the sequencer's job ends once the launch call
    /// returns, and the launch outcome is reported but not judged.
    pub forward_launch_exit: bool,
}

/// Runtime probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Runtime binary name, or a direct path.
    pub binary: String,

    /// Arguments that make the runtime report its version.
    pub version_args: Vec<String>,
}

/// Dependency install settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Directory (relative to the project root) whose presence means
    /// dependencies are already installed. Presence is not validated
    /// for completeness.
    pub marker: PathBuf,

    /// Install command, run when the marker is absent.
    pub install: String,
}

/// Migration and launch commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Migration command, always run before launch.
    pub migrate: String,

    /// Application start command. Blocks for the app's lifetime.
    pub start: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            dependencies: DependencyConfig::default(),
            commands: CommandConfig::default(),
            forward_launch_exit: false,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: "node".to_string(),
            version_args: vec!["--version".to_string()],
        }
    }
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            marker: PathBuf::from("node_modules"),
            install: "npm install".to_string(),
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            migrate: "npm run migrate".to_string(),
            start: "npm start".to_string(),
        }
    }
}

impl BootConfig {
    /// Validate structural requirements the types can't express.
    pub fn validate(&self) -> Result<()> {
        if self.runtime.binary.trim().is_empty() {
            return Err(LiftoffError::ConfigValidationError {
                message: "runtime.binary must not be empty".to_string(),
            });
        }

        if self.dependencies.marker.as_os_str().is_empty() {
            return Err(LiftoffError::ConfigValidationError {
                message: "dependencies.marker must not be empty".to_string(),
            });
        }

        for (key, command) in [
            ("dependencies.install", &self.dependencies.install),
            ("commands.migrate", &self.commands.migrate),
            ("commands.start", &self.commands.start),
        ] {
            if command.trim().is_empty() {
                return Err(LiftoffError::ConfigValidationError {
                    message: format!("{} must not be empty", key),
                });
            }
        }

        Ok(())
    }
}
