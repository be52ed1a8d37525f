use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Every failure the cleaner can surface to the process boundary
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration file {}: {message}", path.display())]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    #[error("'run_dir' was empty/not found in the config file: {reason}")]
    MissingRunDir { reason: String },

    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied while deleting {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete {}: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    pub fn missing_run_dir(reason: impl Into<String>) -> Self {
        Self::MissingRunDir {
            reason: reason.into(),
        }
    }

    /// Classify an I/O failure raised while removing `path`
    pub fn from_removal(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::DirectoryNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source: err },
            _ => Self::Deletion { path, source: err },
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::ConfigNotFound { .. } => ErrorCode::CONFIG_NOT_FOUND,
            Self::ConfigUnreadable { .. } => ErrorCode::CONFIG_UNREADABLE,
            Self::ConfigParse { .. } => ErrorCode::CONFIG_INVALID_YAML,
            Self::MissingRunDir { .. } => ErrorCode::CONFIG_MISSING_REQUIRED,
            Self::DirectoryNotFound { .. } => ErrorCode::STORAGE_NOT_FOUND,
            Self::PermissionDenied { .. } => ErrorCode::STORAGE_PERMISSION_DENIED,
            Self::Deletion { .. } => ErrorCode::STORAGE_IO_ERROR,
        }
    }

    /// Whether the error stems from the configuration rather than the filesystem
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigUnreadable { .. }
                | Self::ConfigParse { .. }
                | Self::MissingRunDir { .. }
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            4
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        let prefix = if self.is_config_error() {
            "Configuration problem"
        } else {
            "Cleanup failed"
        };
        format!("[E{:04}] {}: {}", self.code(), prefix, self)
    }

    /// Get a developer-friendly error message with the full source chain
    pub fn developer_message(&self) -> String {
        let mut msg = format!("{} ({})", self, describe_error_code(self.code()));
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using CleanError
pub type Result<T> = std::result::Result<T, CleanError>;
