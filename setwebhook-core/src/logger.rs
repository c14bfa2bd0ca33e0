//! Logging initialization: human-readable lines on stderr, optionally teed to a log file.
//!
//! Stdout is left alone so the CLI can print Telegram's response body there.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Initializes the global tracing subscriber.
///
/// Format: `YYYY-MM-DD HH:MM:SS LEVEL [target] message key=value ...`.
/// Level from `RUST_LOG` (e.g. `info`, `debug`); default `info`. Load `.env` before calling.
/// When `log_file_path` is set, the same lines are appended to that file without ANSI codes.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .event_format(event_format())
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    let file_layer = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .event_format(event_format())
                    .with_span_events(FmtSpan::NONE)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

fn event_format() -> tracing_subscriber::fmt::format::Format<tracing_subscriber::fmt::format::Full, ChronoLocal> {
    tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
}
