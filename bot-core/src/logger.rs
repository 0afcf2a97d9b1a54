//! Logging setup. Records go to a log file and are echoed to stdout; the level defaults to the
//! one the bot is configured with and `RUST_LOG` overrides it.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Opens `path` for appending, creating missing parent directories first.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Directive used when `RUST_LOG` is unset or unparsable.
fn filter_or(default_level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", default_level, e)),
    }
}

/// Installs the global subscriber: one line per event with timestamp, level, target and fields,
/// written to `log_file` and stdout. Load `.env` before calling this or `RUST_LOG` is ignored.
pub fn init_tracing(log_file: &Path, default_level: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(log_file)?);
    let filter = filter_or(default_level)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(file.and(io::stdout))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
