// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! The food dictionary file: every food item, kept sorted by name.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::FoodItem;

use super::json_file;

pub const FOOD_DICTIONARY_FILE_NAME: &str = "food_dictionary.json";

/// Handle to `food_dictionary.json`. Every call reads the file fresh.
#[derive(Debug, Clone)]
pub struct FoodDictionary {
    path: PathBuf,
}

impl FoodDictionary {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FOOD_DICTIONARY_FILE_NAME),
        }
    }

    /// All items. A missing dictionary is empty.
    pub fn load(&self) -> Result<Vec<FoodItem>> {
        let items = json_file::read_records(&self.path)?.unwrap_or_default();
        debug!(path = %self.path.display(), count = items.len(), "food dictionary loaded");
        Ok(items)
    }

    /// Replace the whole dictionary, sorting by name first.
    pub fn save(&self, mut items: Vec<FoodItem>) -> Result<()> {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        json_file::write_records(&self.path, &items)
    }

    pub fn remove(&self) -> Result<bool> {
        json_file::remove_file(&self.path)
    }
}
