// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Error types for user input validation and local persistence.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Problems with user-provided input. Messages are shown verbatim in the error dialog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please provide a name for the entry.")]
    MissingName,

    #[error("Please provide a valid serving size amount (10, 3.75, etc.).")]
    InvalidServingSize,

    #[error("Please provide a serving size. You may enter up to three, but only one is required.")]
    MissingServingSize,

    #[error(
        "Please either give a valid number for '{0}' (10, 3.75, etc.), or leave the field blank."
    )]
    InvalidNutrient(&'static str),

    #[error(
        "Please provide an amount for both fields in the cost section, or leave both fields blank."
    )]
    IncompleteCost,

    #[error("Please provide a valid price and a number of servings greater than zero.")]
    InvalidCost,

    #[error("Please select at least one entry.")]
    NothingSelected,

    #[error("Please provide an amount for '{0}'.")]
    MissingAmount(String),

    #[error("Please provide a valid number for the amount of '{0}'.")]
    InvalidAmount(String),

    #[error("'{food}' has no serving size measured in {unit}.")]
    UnsupportedUnit { food: String, unit: String },

    #[error("Please provide a date for the log you want to view or edit.")]
    BlankDate,

    #[error("Please provide a valid day of the month (1 - 31).")]
    InvalidDay,

    #[error("Please provide a valid four-digit year.")]
    InvalidYear,

    #[error("The date you have entered does not exist. Please check the date and try again.")]
    NonexistentDate,
}

/// Errors that can occur while reading or writing the food dictionary and logs.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize records for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "The entry name '{0}' matches an existing one in the food dictionary. Please enter a different name or edit the existing entry."
    )]
    DuplicateFood(String),

    #[error("There is no entry for '{0}' in the food dictionary.")]
    FoodNotFound(String),

    #[error("{} still referenced by log entries on {}.", quoted(.names), format_dates(.dates))]
    FoodInUse {
        names: Vec<String>,
        dates: Vec<NaiveDate>,
    },

    #[error(
        "There is already an entry for '{0}' in the log. Please edit the existing entry instead of adding a new one."
    )]
    DuplicateLogEntry(String),

    #[error("There is no log for {}.", crate::logic::dates::long_date(.0))]
    LogNotFound(NaiveDate),

    #[error("The log for {} has no entry for '{name}'.", crate::logic::dates::long_date(.date))]
    EntryNotFound { date: NaiveDate, name: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for problems the user can fix by changing their input.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::Io { .. } | Self::Parse { .. } | Self::Serialize { .. }
        )
    }
}

fn quoted(names: &[String]) -> String {
    let list = names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() == 1 {
        format!("{list} is")
    } else {
        format!("{list} are")
    }
}

fn format_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
