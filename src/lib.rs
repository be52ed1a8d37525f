//! # cupid-clean
//!
//! Removes the `computed_notebooks` directory a notebook-execution pipeline
//! writes under its configured `run_dir`, so a fresh run starts from scratch.
//!
//! ## Usage
//!
//! ```bash
//! cupid-clean [CONFIG_PATH]
//! ```
//!
//! ## Modules
//!
//! - `app` - Application configuration, logging setup and fatal error reporting
//! - `clean` - Target path resolution and recursive deletion
//! - `cli` - Command-line argument structures
//! - `config` - Loading and querying the project configuration file
//! - `error` - Error taxonomy and error codes
pub mod app;
pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
