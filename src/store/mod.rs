// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! File-backed storage for the food dictionary and the daily logs.
//!
//! Everything lives under one data directory:
//!
//! ```text
//! <data dir>/
//!   food_dictionary.json
//!   logs/<YYYY>/<MM>/<DD>.json
//! ```
//!
//! The store holds no cached state; each call reads what it needs from disk.

mod food_dictionary;
mod json_file;
mod log_book;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError, ValidationError};
use crate::models::{FoodItem, LogEntry};

use food_dictionary::FoodDictionary;
use log_book::LogBook;

/// What to do when a food being deleted is still referenced by log entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Refuse with [`StoreError::FoodInUse`].
    #[default]
    Restrict,
    /// Remove the referencing log entries as well.
    Cascade,
}

/// Data-access layer over one data directory.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
    dictionary: FoodDictionary,
    logs: LogBook,
}

impl Store {
    /// Open (and create if needed) the data directory.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|err| StoreError::io(&data_dir, err))?;
        info!(data_dir = %data_dir.display(), "store opened");
        Ok(Self {
            dictionary: FoodDictionary::new(&data_dir),
            logs: LogBook::new(&data_dir),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ---- food dictionary -------------------------------------------------

    /// All food items sorted by name.
    pub fn foods(&self) -> Result<Vec<FoodItem>> {
        self.dictionary.load()
    }

    pub fn food(&self, name: &str) -> Result<Option<FoodItem>> {
        Ok(self.foods()?.into_iter().find(|f| f.name == name))
    }

    /// Add a new item. Names are unique.
    pub fn add_food(&self, item: FoodItem) -> Result<()> {
        let mut items = self.foods()?;
        if items.iter().any(|f| f.name == item.name) {
            return Err(StoreError::DuplicateFood(item.name));
        }
        info!(name = %item.name, "adding food");
        items.push(item);
        self.dictionary.save(items)
    }

    /// Replace the item called `original_name` with `item`.
    ///
    /// When the name changes, log entries that reference the old name are renamed too.
    pub fn update_food(&self, original_name: &str, item: FoodItem) -> Result<()> {
        let mut items = self.foods()?;
        let Some(index) = items.iter().position(|f| f.name == original_name) else {
            return Err(StoreError::FoodNotFound(original_name.to_string()));
        };
        let renamed = item.name != original_name;
        if renamed && items.iter().any(|f| f.name == item.name) {
            return Err(StoreError::DuplicateFood(item.name));
        }

        info!(name = %original_name, new_name = %item.name, "updating food");
        let new_name = item.name.clone();
        items[index] = item;
        self.dictionary.save(items)?;

        if renamed {
            self.rename_log_references(original_name, &new_name)?;
        }
        Ok(())
    }

    /// Delete the named items. Returns how many were removed.
    pub fn delete_foods(&self, names: &[String], policy: DeletePolicy) -> Result<usize> {
        if names.is_empty() {
            return Err(ValidationError::NothingSelected.into());
        }
        let items = self.foods()?;
        if let Some(missing) = names.iter().find(|n| !items.iter().any(|f| &f.name == *n)) {
            return Err(StoreError::FoodNotFound(missing.clone()));
        }

        self.release_references(names, policy)?;

        let before = items.len();
        let kept: Vec<_> = items
            .into_iter()
            .filter(|f| !names.contains(&f.name))
            .collect();
        let removed = before - kept.len();
        info!(removed, "deleting foods");
        self.dictionary.save(kept)?;
        Ok(removed)
    }

    /// Delete every item and the dictionary file itself.
    pub fn clear_food_dictionary(&self, policy: DeletePolicy) -> Result<usize> {
        let names: Vec<String> = self.foods()?.into_iter().map(|f| f.name).collect();
        self.release_references(&names, policy)?;
        self.dictionary.remove()?;
        info!(removed = names.len(), "food dictionary cleared");
        Ok(names.len())
    }

    // ---- logs -------------------------------------------------------------

    /// Entries logged on `date`. Empty when there is no log.
    pub fn log(&self, date: NaiveDate) -> Result<Vec<LogEntry>> {
        Ok(self.logs.load(date)?.unwrap_or_default())
    }

    #[cfg(test)]
    pub fn log_exists(&self, date: NaiveDate) -> bool {
        self.logs.exists(date)
    }

    /// Add entries to the log for `date`, creating it if needed.
    ///
    /// Every entry must name a food in the dictionary, and a food may appear only once per log.
    pub fn add_log_entries(&self, date: NaiveDate, entries: Vec<LogEntry>) -> Result<()> {
        if entries.is_empty() {
            return Err(ValidationError::NothingSelected.into());
        }
        self.ensure_foods_exist(&entries)?;

        let mut log = self.log(date)?;
        let mut seen: BTreeSet<&str> = log.iter().map(|e| e.food_name.as_str()).collect();
        for entry in &entries {
            if !seen.insert(entry.food_name.as_str()) {
                return Err(StoreError::DuplicateLogEntry(entry.food_name.clone()));
            }
        }

        info!(%date, count = entries.len(), "adding log entries");
        log.extend(entries);
        self.write_log(date, log)
    }

    /// Replace entries in the log for `date` by food name.
    pub fn update_log_entries(&self, date: NaiveDate, entries: Vec<LogEntry>) -> Result<()> {
        if entries.is_empty() {
            return Err(ValidationError::NothingSelected.into());
        }
        self.ensure_foods_exist(&entries)?;

        let mut log = self.existing_log(date)?;
        for entry in entries {
            let Some(slot) = log.iter_mut().find(|e| e.food_name == entry.food_name) else {
                return Err(StoreError::EntryNotFound {
                    date,
                    name: entry.food_name,
                });
            };
            *slot = entry;
        }

        debug!(%date, "updating log entries");
        self.write_log(date, log)
    }

    /// Remove the named entries. A log left empty is deleted.
    pub fn remove_log_entries(&self, date: NaiveDate, names: &[String]) -> Result<usize> {
        if names.is_empty() {
            return Err(ValidationError::NothingSelected.into());
        }
        let mut log = self.existing_log(date)?;
        if let Some(missing) = names.iter().find(|n| !log.iter().any(|e| &e.food_name == *n)) {
            return Err(StoreError::EntryNotFound {
                date,
                name: missing.clone(),
            });
        }

        let before = log.len();
        log.retain(|e| !names.contains(&e.food_name));
        let removed = before - log.len();
        info!(%date, removed, "removing log entries");
        self.write_log(date, log)?;
        Ok(removed)
    }

    /// Delete the whole log for `date`.
    pub fn delete_log(&self, date: NaiveDate) -> Result<()> {
        if !self.logs.remove(date)? {
            return Err(StoreError::LogNotFound(date));
        }
        info!(%date, "log deleted");
        Ok(())
    }

    /// Every date with a log, oldest first.
    pub fn log_dates(&self) -> Result<Vec<NaiveDate>> {
        self.logs.dates()
    }

    /// The closest logged date strictly before `date`.
    pub fn previous_log_date(&self, date: NaiveDate) -> Result<Option<NaiveDate>> {
        Ok(self.log_dates()?.into_iter().rev().find(|d| *d < date))
    }

    /// The closest logged date strictly after `date`.
    pub fn next_log_date(&self, date: NaiveDate) -> Result<Option<NaiveDate>> {
        Ok(self.log_dates()?.into_iter().find(|d| *d > date))
    }

    // ---- helpers ----------------------------------------------------------

    fn existing_log(&self, date: NaiveDate) -> Result<Vec<LogEntry>> {
        self.logs
            .load(date)?
            .ok_or(StoreError::LogNotFound(date))
    }

    fn write_log(&self, date: NaiveDate, mut log: Vec<LogEntry>) -> Result<()> {
        log.sort_by(|a, b| a.food_name.cmp(&b.food_name));
        self.logs.save(date, &log)
    }

    fn ensure_foods_exist(&self, entries: &[LogEntry]) -> Result<()> {
        let foods = self.foods()?;
        match entries
            .iter()
            .find(|e| !foods.iter().any(|f| f.name == e.food_name))
        {
            Some(orphan) => Err(StoreError::FoodNotFound(orphan.food_name.clone())),
            None => Ok(()),
        }
    }

    /// Dates whose logs reference any of `names`.
    fn referencing_dates(&self, names: &[String]) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        for date in self.log_dates()? {
            if self
                .log(date)?
                .iter()
                .any(|e| names.contains(&e.food_name))
            {
                dates.push(date);
            }
        }
        Ok(dates)
    }

    /// Apply `policy` to log entries that still reference `names`.
    fn release_references(&self, names: &[String], policy: DeletePolicy) -> Result<()> {
        let dates = self.referencing_dates(names)?;
        if dates.is_empty() {
            return Ok(());
        }

        match policy {
            DeletePolicy::Restrict => {
                let mut in_use = BTreeSet::new();
                for date in &dates {
                    for entry in self.log(*date)? {
                        if names.contains(&entry.food_name) {
                            in_use.insert(entry.food_name);
                        }
                    }
                }
                warn!(?in_use, "refusing to delete foods still in use");
                Err(StoreError::FoodInUse {
                    names: in_use.into_iter().collect(),
                    dates,
                })
            }
            DeletePolicy::Cascade => {
                for date in dates {
                    let mut log = self.log(date)?;
                    log.retain(|e| !names.contains(&e.food_name));
                    debug!(%date, remaining = log.len(), "cascading food delete into log");
                    self.write_log(date, log)?;
                }
                Ok(())
            }
        }
    }

    fn rename_log_references(&self, old: &str, new: &str) -> Result<()> {
        for date in self.log_dates()? {
            let mut log = self.log(date)?;
            let mut touched = false;
            for entry in log.iter_mut().filter(|e| e.food_name == old) {
                entry.food_name = new.to_string();
                touched = true;
            }
            if touched {
                debug!(%date, old, new, "renaming log references");
                self.write_log(date, log)?;
            }
        }
        Ok(())
    }
}
