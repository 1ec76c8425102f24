//! Runtime probe.
//!
//! Before anything else runs, the sequencer verifies that the configured
//! runtime (Node.js by default) is actually present and answers its
//! version command. The probe resolves the binary against PATH itself
//! rather than shelling out to `which`, whose behavior varies across
//! systems and is sometimes a shell builtin with inconsistent error
//! handling.

use crate::config::RuntimeConfig;
use crate::error::{LiftoffError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of probing for the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeProbe {
    /// Resolved path of the runtime binary.
    pub binary_path: PathBuf,
    /// Raw stdout of the version command.
    pub version_output: String,
    /// Dotted version extracted from the output, when one is present.
    pub version: Option<String>,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve the runtime binary.
///
/// A configured binary containing a path separator is treated as a direct
/// path; a bare name is resolved by iterating over PATH entries, returning
/// the first match that exists and is executable.
pub fn resolve_runtime(binary: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let direct = Path::new(binary);
    if direct.components().count() > 1 {
        if direct.is_file() && is_executable(direct) {
            return Some(direct.to_path_buf());
        }
        return None;
    }

    for dir in path_entries {
        let candidate = dir.join(binary);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Extract a dotted version number from version-command output.
///
/// Handles the common shapes: `v20.11.0`, `Python 3.12.1`, `8.1`.
pub fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"\d+\.\d+(?:\.\d+)?").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}

/// Probe for the configured runtime and capture its reported version.
///
/// Returns [`LiftoffError::RuntimeMissing`] when the binary cannot be
/// located or refuses to execute.
pub fn probe(runtime: &RuntimeConfig) -> Result<RuntimeProbe> {
    let binary_path = resolve_runtime(&runtime.binary, &parse_system_path()).ok_or_else(|| {
        LiftoffError::RuntimeMissing {
            binary: runtime.binary.clone(),
        }
    })?;

    tracing::debug!("runtime resolved to {}", binary_path.display());

    let output = Command::new(&binary_path)
        .args(&runtime.version_args)
        .output()
        .map_err(|_| LiftoffError::RuntimeMissing {
            binary: runtime.binary.clone(),
        })?;

    let version_output = String::from_utf8_lossy(&output.stdout).to_string();
    let version = extract_version(&version_output);

    Ok(RuntimeProbe {
        binary_path,
        version_output,
        version,
    })
}
