// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Diagnostics logging to stderr and to `healthhelper.log` in the data directory.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, prelude::*};

const LOG_FILE_NAME: &str = "healthhelper.log";
const MAX_LOG_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Install the global subscriber writing to stderr and `healthhelper.log` in `data_dir`.
pub fn init(data_dir: &Path, filter: &str) -> Result<()> {
    let log_file_path = data_dir.join(LOG_FILE_NAME);
    let log_file = open_log_file(&log_file_path)?;
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter `{filter}`"))?;

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(SharedLogWriterFactory::new(log_file)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize diagnostics logger")?;

    info!(log_file = %log_file_path.display(), "diagnostic logging initialized");
    Ok(())
}

fn open_log_file(log_file_path: &Path) -> Result<File> {
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory `{}`", parent.display()))?;
    }

    cap_log_file_size(log_file_path, MAX_LOG_FILE_BYTES)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("Failed to open log file `{}`", log_file_path.display()))
}

/// Truncate the file when it has grown past `max_bytes`.
fn cap_log_file_size(log_file_path: &Path, max_bytes: u64) -> Result<()> {
    let metadata = match fs::metadata(log_file_path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to inspect `{}`", log_file_path.display()));
        }
    };

    if metadata.len() > max_bytes {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .with_context(|| format!("Failed to truncate `{}`", log_file_path.display()))?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct SharedLogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl SharedLogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogWriterFactory {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

impl io::Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .flush()
    }
}
