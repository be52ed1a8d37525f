//! CLI argument structures

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Cleans the contents of the "computed_notebooks" folder at the location
/// specified by the "run_dir" variable in the CONFIG_PATH.
#[derive(Parser, Debug)]
#[command(name = "cupid-clean")]
#[command(
    about = "Cleans the contents of the \"computed_notebooks\" folder at the location specified by the \"run_dir\" variable in the CONFIG_PATH.",
    long_about = None
)]
pub struct Cli {
    /// The path to the configuration file
    #[arg(value_name = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,
}
