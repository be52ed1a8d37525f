use super::ControlDict;
use crate::error::{CleanError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Configuration file read when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Read and parse the configuration file at `config_path`
pub fn get_control_dict(config_path: &Path) -> Result<ControlDict> {
    let content = fs::read_to_string(config_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanError::ConfigNotFound {
            path: config_path.to_path_buf(),
        },
        _ => CleanError::ConfigUnreadable {
            path: config_path.to_path_buf(),
            source: e,
        },
    })?;

    let parse_error = |e: serde_yaml::Error| CleanError::ConfigParse {
        path: config_path.to_path_buf(),
        message: e.to_string(),
        source: Some(e),
    };

    let mut document: Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    // `<<: *anchor` merge keys are left as literal entries until applied
    document.apply_merge().map_err(parse_error)?;

    let root = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        other => {
            return Err(CleanError::ConfigParse {
                path: config_path.to_path_buf(),
                message: format!("expected a mapping at the top level, found {}", kind(&other)),
                source: None,
            })
        }
    };

    debug!(
        "Loaded configuration from {} ({} top-level keys)",
        config_path.display(),
        root.len()
    );

    Ok(ControlDict::new(root))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
