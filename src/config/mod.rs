//! Project configuration access
//!
//! The configuration file is a YAML document owned by the notebook pipeline.
//! This tool only reads a handful of fields from it, so the document is kept
//! as a dynamic mapping and queried through explicit key chains.

use serde_yaml::{Mapping, Value};

pub mod loader;

pub use loader::{get_control_dict, DEFAULT_CONFIG_PATH};

/// In-memory mapping produced by parsing the configuration file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlDict {
    root: Mapping,
}

impl ControlDict {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Look up a value by key chain, `None` if any segment is absent or
    /// an intermediate value is not a mapping
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.root.get(*first)?;
        for key in rest {
            current = current.as_mapping()?.get(*key)?;
        }
        Some(current)
    }

    /// Look up a string value by key chain
    pub fn get_str(&self, keys: &[&str]) -> Option<&str> {
        self.get(keys).and_then(Value::as_str)
    }

    /// Optional `computation_config.log_level` setting
    pub fn log_level(&self) -> Option<&str> {
        self.get_str(&["computation_config", "log_level"])
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }
}
