// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! One JSON file per logged day, laid out as `logs/<YYYY>/<MM>/<DD>.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::models::LogEntry;

use super::json_file;

const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Clone)]
pub struct LogBook {
    root: PathBuf,
}

impl LogBook {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join(LOGS_DIR_NAME),
        }
    }

    /// File that holds the log for `date`, whether or not it exists yet.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("{:04}", date.year()))
            .join(format!("{:02}", date.month()))
            .join(format!("{:02}.json", date.day()))
    }

    #[cfg(test)]
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    /// Entries logged on `date`, or `None` when there is no log for that day.
    pub fn load(&self, date: NaiveDate) -> Result<Option<Vec<LogEntry>>> {
        json_file::read_records(&self.path_for(date))
    }

    /// Write the log for `date`. An empty list deletes the file instead.
    pub fn save(&self, date: NaiveDate, entries: &[LogEntry]) -> Result<()> {
        let path = self.path_for(date);
        if entries.is_empty() {
            self.remove(date)?;
            return Ok(());
        }
        debug!(path = %path.display(), count = entries.len(), "writing log");
        json_file::write_records(&path, entries)
    }

    /// Delete the log for `date` and prune now-empty month/year folders.
    pub fn remove(&self, date: NaiveDate) -> Result<bool> {
        let path = self.path_for(date);
        let removed = json_file::remove_file(&path)?;
        if removed {
            let mut dir = path.parent();
            while let Some(d) = dir {
                if d == self.root || fs::remove_dir(d).is_err() {
                    break;
                }
                dir = d.parent();
            }
        }
        Ok(removed)
    }

    /// Every date that has a log file, oldest first. Files that do not follow the
    /// `YYYY/MM/DD.json` layout are skipped.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        for (year, year_dir) in numbered_children(&self.root)? {
            for (month, month_dir) in numbered_children(&year_dir)? {
                for (day, day_file) in numbered_children(&month_dir)? {
                    if day_file.extension().and_then(|e| e.to_str()) != Some("json") {
                        continue;
                    }
                    let date = i32::try_from(year)
                        .ok()
                        .and_then(|year| NaiveDate::from_ymd_opt(year, month, day));
                    match date {
                        Some(date) => dates.push(date),
                        None => {
                            warn!(path = %day_file.display(), "skipping log file with invalid date")
                        }
                    }
                }
            }
        }
        dates.sort();
        Ok(dates)
    }
}

/// Children of `dir` whose file stem is a number, paired with that number.
fn numbered_children(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::io(dir, err)),
    };

    let mut out = Vec::new();
    for entry in read_dir {
        let path = entry.map_err(|err| StoreError::io(dir, err))?.path();
        let number = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u32>().ok());
        if let Some(n) = number {
            out.push((n, path));
        }
    }
    Ok(out)
}
