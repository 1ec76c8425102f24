//! Configuration loading, parsing, and validation.

pub mod loader;
pub mod schema;

pub use loader::{load, CONFIG_FILE};
pub use schema::{BootConfig, CommandConfig, DependencyConfig, RuntimeConfig};
