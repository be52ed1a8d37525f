//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, CleanError, ErrorCode};
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `CleanError`: shows the user message, plus the source chain when verbose
/// - For other errors: shows the error message under the generic code and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: bool) -> ! {
    error!("Fatal error: {}", error);
    std::process::exit(report(&error, verbose))
}

/// Print the diagnostic for `error` to stderr and return the exit code
fn report(error: &anyhow::Error, verbose: bool) -> i32 {
    if let Some(clean_err) = error.downcast_ref::<CleanError>() {
        eprintln!("{}", clean_err.user_message());

        if verbose {
            eprintln!("\nContext Chain:\n{}", clean_err.developer_message());
        }

        clean_err.exit_code()
    } else {
        eprintln!("{}", other_error_message(error));

        if verbose {
            eprintln!("\nError chain ({}):", describe_error_code(ErrorCode::OTHER_GENERIC));
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    }
}

/// User message for errors outside the `CleanError` taxonomy
fn other_error_message(error: &anyhow::Error) -> String {
    format!("[E{:04}] Error: {error}", ErrorCode::OTHER_GENERIC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_clean_errors_keep_their_exit_code() {
        let err = anyhow::Error::from(CleanError::DirectoryNotFound {
            path: PathBuf::from("run/computed_notebooks"),
        });
        assert_eq!(report(&err, false), 4);

        let err = anyhow::Error::from(CleanError::missing_run_dir("'data_sources' section is missing"));
        assert_eq!(report(&err, true), 2);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let err = anyhow::anyhow!("unexpected");
        assert_eq!(report(&err, false), 1);
        assert_eq!(other_error_message(&err), "[E9000] Error: unexpected");
    }
}
