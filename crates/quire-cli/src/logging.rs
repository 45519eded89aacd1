//! File logging.
//!
//! Events go to `${QUIRE_HOME}/logs/quire.log` through a non-blocking writer
//! so they never interleave with command output. `QUIRE_LOG` holds the
//! filter directives (default `warn`).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use quire_core::config::paths;

pub const LOG_ENV: &str = "QUIRE_LOG";
const LOG_FILE: &str = "quire.log";

/// Installs the global subscriber. The returned guard flushes pending
/// lines on drop; keep it alive until exit.
///
/// Logging is skipped when the log directory cannot be created.
pub fn init() -> Option<WorkerGuard> {
    let dir = paths::logs_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init();

    Some(guard)
}
