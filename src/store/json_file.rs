// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! JSON file helpers shared by the food dictionary and the log files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};

/// Read a JSON array of records. A missing or blank file reads as `None`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::io(path, err)),
    };

    if raw.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Write records to `path` via a temporary sibling file and a rename, creating parent
/// directories as needed.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
    }

    let serialized =
        serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    write_atomic_file(path, &serialized)
}

/// Write into a fresh hidden sibling, flush it to disk, then rename over `path`.
/// The temporary file is removed if any step fails.
fn write_atomic_file(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_file_path_for(path);
    let mut temp_file = fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&temp_path)
        .map_err(|err| StoreError::io(&temp_path, err))?;

    if let Err(err) = temp_file.write_all(contents).and_then(|()| temp_file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::io(&temp_path, err));
    }
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        StoreError::io(path, err)
    })
}

fn temp_file_path_for(path: &Path) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("records.json");
    let pid = std::process::id();

    path.with_file_name(format!(".{file_name}.{pid}.{timestamp}.tmp"))
}

/// Remove a file. Returns `false` when it did not exist.
pub fn remove_file(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(StoreError::io(path, err)),
    }
}
