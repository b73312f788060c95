//! Log output for the CLI and the API server.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs the process-wide logger.
///
/// `level` applies to this crate and is the default for everything else;
/// `RUST_LOG` is read first, so its per-module directives still apply. HTTP
/// stack internals are capped at info (rustls at warn) to keep per-hop debug
/// output readable.
///
/// `Plain` writes one colored line per record. `Json` writes one object per
/// line with `ts` (epoch millis), `level`, `target` and `msg`.
///
/// ```bash
/// RUST_LOG=h2=debug header_inspector serve --log-format json
/// header_inspector check https://example.com --log-level debug
/// ```
///
/// # Errors
///
/// `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Info)
        .filter_module("hyper_util", LevelFilter::Info)
        .filter_module("rustls", LevelFilter::Warn)
        .filter_module("header_inspector", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let msg = serde_json::to_string(&record.args().to_string())
                    .unwrap_or_else(|_| "\"\"".into());
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    msg
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (marker, level) = level_badge(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    marker,
                    record.target().cyan(),
                    level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)
}

/// Marker and colored label for a plain-format line.
fn level_badge(level: Level) -> (&'static str, ColoredString) {
    let label = level.to_string();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
