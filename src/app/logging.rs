//! Logging configuration and initialization
//!
//! The subscriber is installed as the default for the calling thread and stays
//! active for as long as the returned [`LoggingHandle`] is alive.

use crate::app::config::AppConfig;
use tracing::subscriber::DefaultGuard;
use tracing::{debug, trace, warn};
use tracing_subscriber::fmt::MakeWriter;

/// Owns the active subscriber; logging stops when it is dropped
#[must_use = "logging is disabled as soon as the handle is dropped"]
pub struct LoggingHandle {
    _guard: DefaultGuard,
}

/// Initialize tracing/logging to stdout
pub fn init_logging(config: &AppConfig) -> LoggingHandle {
    init_logging_with_writer(config, std::io::stdout)
}

/// Initialize tracing/logging with a custom writer
pub fn init_logging_with_writer<W>(config: &AppConfig, writer: W) -> LoggingHandle
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_target(config.is_verbose())
        .with_line_number(config.is_verbose())
        .with_writer(writer)
        .finish();

    let handle = LoggingHandle {
        _guard: tracing::subscriber::set_default(subscriber),
    };

    if let Some(level) = config.unrecognized_log_level() {
        warn!("Unknown log_level '{}' in configuration, using info", level);
    }
    debug!(
        "cupid-clean started with config {}",
        config.config_path.display()
    );
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    handle
}
