//! Structured logging initialization.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber: env-filtered stdout plus a daily
/// rolling log file in the working directory.
///
/// The returned guard owns the file writer's flush thread. Hold it for
/// the life of the process so buffered events are written out on exit.
pub fn init() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(".", "server_watchdog.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server_watchdog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}
