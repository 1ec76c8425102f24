//! Liftoff - boot sequencer for runtime-backed applications.
//!
//! Liftoff replaces ad-hoc start scripts with a fixed, observable boot
//! sequence: probe the runtime, install dependencies when the marker
//! directory is absent, run migrations, launch the application. The
//! first failure aborts the sequence; nothing is retried.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`runtime`] - Runtime probing and version capture
//! - [`sequencer`] - The boot sequence itself
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, styling, and spinners
//!
//! # Example
//!
//! ```no_run
//! use liftoff::config::BootConfig;
//! use liftoff::sequencer::Sequencer;
//! use liftoff::ui::{Output, OutputMode};
//!
//! let config = BootConfig::default();
//! let sequencer = Sequencer::new(&config, std::path::Path::new("."));
//! let out = Output::new(OutputMode::Normal, true);
//! let _report = sequencer.run(&out)?;
//! # Ok::<(), liftoff::LiftoffError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod sequencer;
pub mod shell;
pub mod ui;

pub use error::{LiftoffError, Result};
