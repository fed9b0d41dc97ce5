//! Logging setup for the Seven Barber service.
//!
//! All crates log through the `tracing` macros. The binary calls
//! [`init_with_level`] once at startup to install the subscriber.

use std::str::FromStr;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the filter: `rust_log` verbatim when it is non-empty, otherwise
/// the service targets at `level`, `tower_http` at INFO and everything else at WARN.
pub fn env_filter(level: Level, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(format!("warn,sevenbarber={},tower_http=info", level)),
    }
}

/// Initialize the tracing subscriber.
///
/// A non-empty `RUST_LOG` replaces the defaults entirely, see [`env_filter`].
/// When `directory` is given a second, non-ANSI layer writes to a daily
/// rolling file there. The returned guard must be kept alive for the file
/// writer to flush.
pub fn init_with_level(level: Level, directory: Option<&str>) -> Option<WorkerGuard> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(level, rust_log.as_deref());

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sevenbarber.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    // try_init: a subscriber may already be installed (tests)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(file_layer)
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }

    guard
}

/// Parses a configured level name, falling back to INFO.
pub fn parse_level(level: Option<&str>) -> Level {
    level
        .and_then(|name| Level::from_str(name).ok())
        .unwrap_or(Level::INFO)
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
