//! Removal of the generated `computed_notebooks` directory
//!
//! The target is always `<data_sources.run_dir>/computed_notebooks`. Resolution
//! is pure; deletion is unconditional and recursive.

use crate::config::ControlDict;
use crate::error::{CleanError, Result};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod command;

pub use command::CleanCommand;

/// Subdirectory of `run_dir` that holds executed notebooks
pub const COMPUTED_NOTEBOOKS_DIR: &str = "computed_notebooks";

/// Resolve the directory to clean from the control dict
pub fn resolve_target_path(config: &ControlDict) -> Result<PathBuf> {
    let data_sources = config
        .get(&["data_sources"])
        .ok_or_else(|| CleanError::missing_run_dir("'data_sources' section is missing"))?;

    let run_dir = data_sources
        .as_mapping()
        .ok_or_else(|| CleanError::missing_run_dir("'data_sources' is not a mapping"))?
        .get("run_dir");

    match run_dir {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(CleanError::missing_run_dir(
            "'data_sources.run_dir' is not set",
        )),
        Some(Value::String(s)) if s.is_empty() => Err(CleanError::missing_run_dir(
            "'data_sources.run_dir' is empty",
        )),
        Some(Value::String(s)) => Ok(Path::new(s).join(COMPUTED_NOTEBOOKS_DIR)),
        Some(_) => Err(CleanError::missing_run_dir(
            "'data_sources.run_dir' must be a string",
        )),
    }
}

/// Recursively delete `target_path` and everything under it
pub fn clean(target_path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(target_path)
        .map_err(|e| CleanError::from_removal(target_path, e))?;

    if metadata.file_type().is_symlink() {
        return Err(CleanError::Deletion {
            path: target_path.to_path_buf(),
            source: io::Error::other("refusing to delete a symbolic link"),
        });
    }
    if !metadata.is_dir() {
        return Err(CleanError::Deletion {
            path: target_path.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    debug!("Removing directory tree {}", target_path.display());
    fs::remove_dir_all(target_path).map_err(|e| CleanError::from_removal(target_path, e))?;

    info!("All contents in {} have been cleaned.", target_path.display());
    Ok(())
}
