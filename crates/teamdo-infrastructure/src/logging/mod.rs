//! Logging setup.
//!
//! Events go to a daily-rolling `teamdo.log` as one JSON object per line
//! (see [`format::JsonLineFormat`]). Debug builds also print coloured lines to
//! stdout. `log` macros are bridged into `tracing`, and `RUST_LOG` overrides the
//! configured level.

mod format;

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use format::{ConsoleFormat, JsonLineFormat};

const LOG_FILE_PREFIX: &str = "teamdo.log";

/// Keeps the non-blocking file writer alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. A second call is a no-op.
///
/// `default_level` applies when `RUST_LOG` is unset, e.g. `"info"`.
pub fn init_logger(log_dir: PathBuf, default_level: &str) -> anyhow::Result<()> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(&log_dir, LOG_FILE_PREFIX));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .event_format(JsonLineFormat::new())
        .with_filter(level_filter(default_level));

    let console_layer = cfg!(debug_assertions).then(|| {
        fmt::layer()
            .with_ansi(true)
            .event_format(ConsoleFormat::new())
            .with_filter(level_filter("debug"))
    });

    tracing::subscriber::set_global_default(
        Registry::default().with(file_layer).with(console_layer),
    )
    .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = FILE_GUARD.set(guard);

    tracing::info!(
        target: "teamdo::logging",
        log_dir = %log_dir.display(),
        level = default_level,
        "Logger initialized"
    );

    Ok(())
}

/// `RUST_LOG` when set, else `default_level` for everything including `teamdo*`.
fn level_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{0},teamdo={0}", default_level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
