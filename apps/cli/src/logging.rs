// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console and size-capped rotating file logging.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

const DEFAULT_FILTER: &str = "info,curvewall=debug";

/// Log file for a run started at `started`, stamped to the hour.
pub fn log_path(config: &Config, started: DateTime<Local>) -> PathBuf {
    config
        .log_dir
        .join(format!("curvewall-{}.log", started.format("%Y%m%d-%H")))
}

/// Install the global subscriber.
///
/// Logs go to stderr (pretty) and to a JSON file under `config.log_dir`.
/// The file rolls over once it exceeds `config.log_max_bytes`, keeping
/// `config.log_files` backups. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Cannot create log directory '{}'", config.log_dir.display()))?;

    let path = log_path(config, Local::now());
    let file = FileRotate::new(
        &path,
        AppendCount::new(config.log_files.max(1)),
        ContentLimit::BytesSurpassed(config.log_max_bytes.max(1)),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(fmt::layer().json().with_ansi(false).with_writer(writer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "Logging setup complete");
    Ok(guard)
}
