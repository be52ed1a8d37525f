//! Common test utilities and helpers

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context builder for setting up a pipeline project directory
pub struct TestContextBuilder {
    temp_dir: TempDir,
    config: Option<String>,
    initial_dirs: Vec<PathBuf>,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            config: None,
            initial_dirs: Vec::new(),
            initial_files: Vec::new(),
        })
    }

    /// Write `config.yml` with the given contents
    pub fn with_config(mut self, yaml: &str) -> Self {
        self.config = Some(yaml.to_string());
        self
    }

    /// Create an (empty) directory
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.initial_dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Add an initial file, creating parent directories
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.initial_files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        let root = self.temp_dir.path();

        if let Some(config) = &self.config {
            fs::write(root.join("config.yml"), config)?;
        }
        for dir in &self.initial_dirs {
            fs::create_dir_all(root.join(dir))?;
        }
        for (path, content) in &self.initial_files {
            let full_path = root.join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// A temporary project directory
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.path().join(path).exists()
    }
}
