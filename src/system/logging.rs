//! Logging system initialization
//!
//! Sets up the tracing subscriber according to the loaded configuration.

use tracing_subscriber;

use crate::config::Config;

/// Initialize the logging system based on configuration.
///
/// Should be called once during startup, after the configuration has been
/// loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If the global subscriber is already set
pub fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let log_to_stdout = config
        .logging
        .file
        .as_ref()
        .is_none_or(|f| f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = if log_to_stdout {
        Box::new(std::io::stdout())
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.logging.file.as_deref().unwrap_or_default())
            .expect("Failed to open log file");
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_to_stdout);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
