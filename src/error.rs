//! Error types for Liftoff operations.
//!
//! This module defines [`LiftoffError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LiftoffError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LiftoffError::Other`) for unexpected errors
//! - Boot-step failures carry the child's exit code so it can be propagated
//!   as the process exit status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Liftoff operations.
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Configuration file given explicitly but not present.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The runtime executable could not be located.
    #[error("runtime '{binary}' is not installed")]
    RuntimeMissing { binary: String },

    /// A boot step's command exited non-zero.
    #[error("step '{step}' failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    /// A command could not be spawned at all.
    #[error("failed to execute command: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LiftoffError {
    /// Exit status the process should terminate with for this error.
    ///
    /// Step failures propagate the child's own exit code; everything else
    /// maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LiftoffError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for Liftoff operations.
pub type Result<T> = std::result::Result<T, LiftoffError>;
