use super::{clean, resolve_target_path};
use crate::config::{get_control_dict, ControlDict};
use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// A single `cupid-clean` invocation
#[derive(Debug, Clone)]
pub struct CleanCommand {
    pub config_path: PathBuf,
}

impl CleanCommand {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Load the control dict this command operates on
    pub fn load(&self) -> Result<ControlDict> {
        get_control_dict(&self.config_path)
    }

    /// Resolve the target from `control` and delete it, returning the cleaned path
    pub fn execute(&self, control: &ControlDict) -> Result<PathBuf> {
        let target = resolve_target_path(control)?;
        debug!(
            "Resolved {} from {}",
            target.display(),
            self.config_path.display()
        );
        clean(&target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;
    use std::fs;
    use tempfile::TempDir;

    fn load_and_execute(command: &CleanCommand) -> Result<PathBuf> {
        let control = command.load()?;
        command.execute(&control)
    }

    fn write_config(dir: &TempDir, run_dir: &std::path::Path) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            format!("data_sources:\n  run_dir: {}\n", run_dir.display()),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_execute_cleans_computed_notebooks() {
        let temp_dir = TempDir::new().unwrap();
        let run_dir = temp_dir.path().join("run");
        let target = run_dir.join("computed_notebooks");
        fs::create_dir_all(target.join("a")).unwrap();
        fs::write(target.join("a").join("b.txt"), "b").unwrap();
        fs::write(run_dir.join("keep.txt"), "keep").unwrap();

        let command = CleanCommand::new(write_config(&temp_dir, &run_dir));
        let cleaned = load_and_execute(&command).unwrap();

        assert_eq!(cleaned, target);
        assert!(!target.exists());
        assert!(run_dir.join("keep.txt").exists());
    }

    #[test]
    fn test_execute_without_run_dir_leaves_tree_alone() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("run").join("computed_notebooks");
        fs::create_dir_all(&target).unwrap();
        let config_path = temp_dir.path().join("config.yml");
        fs::write(&config_path, "data_sources:\n  run_dir: ''\n").unwrap();

        let err = load_and_execute(&CleanCommand::new(&config_path)).unwrap_err();

        assert!(matches!(err, CleanError::MissingRunDir { .. }));
        assert!(target.exists());
    }

    #[test]
    fn test_second_execute_reports_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let run_dir = temp_dir.path().join("run");
        fs::create_dir_all(run_dir.join("computed_notebooks")).unwrap();
        let command = CleanCommand::new(write_config(&temp_dir, &run_dir));

        load_and_execute(&command).unwrap();
        let err = load_and_execute(&command).unwrap_err();

        assert!(matches!(err, CleanError::DirectoryNotFound { .. }));
        assert!(run_dir.exists());
    }
}
