//! Configuration loading.
//!
//! Resolution order: an explicit `--config` path (which must exist),
//! then `<project>/liftoff.yml`, then built-in defaults. The default
//! location being absent is normal; an explicitly given path being
//! absent is an error.

use std::fs;
use std::path::Path;

use crate::config::schema::BootConfig;
use crate::error::{LiftoffError, Result};

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "liftoff.yml";

/// Load and validate the boot configuration for a project.
pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<BootConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(LiftoffError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let default = project_root.join(CONFIG_FILE);
            default.exists().then_some(default)
        }
    };

    let config = match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_file(&path)?
        }
        None => {
            tracing::debug!("no config file, using defaults");
            BootConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<BootConfig> {
    let raw = fs::read_to_string(path)?;
    serde_yaml::from_str(&raw).map_err(|e| LiftoffError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
