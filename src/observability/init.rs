//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (default `"info"`; an invalid
/// directive also falls back to `"info"`). Events are formatted as text and
/// written to `config.log_file` through a rotating writer, or to stderr when
/// no file is configured.
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Silently returns if that fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use notes_header::observability::init_tracing;
/// use notes_header::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            let writer = RotatingFileWriter::new(path.clone());
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
        }
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };

    if result.is_ok() {
        tracing::debug!(level, log_file = ?config.log_file, "tracing initialized");
    }
}
