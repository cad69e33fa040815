// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Food dictionary entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::nutrients::Nutrients;
use crate::models::units::{AmountUnit, Unit};
use crate::utils::round_to;

/// Container price and how many servings it holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub total_price: f64,
    pub servings_per_container: f64,
}

impl Cost {
    pub fn new(total_price: f64, servings_per_container: f64) -> Self {
        Self {
            total_price,
            servings_per_container,
        }
    }

    /// Price of one serving, rounded to a tenth of a cent.
    pub fn per_serving(&self) -> f64 {
        round_to(self.total_price / self.servings_per_container, 3)
    }
}

/// A single food dictionary record. Nutrient values are per serving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Amount of each unit that makes up one serving, e.g. `{g: 56, cup: 0.5}`.
    pub serving_sizes: BTreeMap<Unit, f64>,
    #[serde(default)]
    pub nutrients: Nutrients,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

impl FoodItem {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, serving_sizes: BTreeMap<Unit, f64>) -> Self {
        Self {
            name: name.into(),
            serving_sizes,
            nutrients: Nutrients::default(),
            cost: None,
        }
    }

    /// Size of one serving in `unit`, when the label lists it.
    pub fn serving_size(&self, unit: Unit) -> Option<f64> {
        self.serving_sizes.get(&unit).copied()
    }

    /// Units a log amount may be given in: servings first, then each serving-size unit.
    pub fn amount_units(&self) -> Vec<AmountUnit> {
        std::iter::once(AmountUnit::Servings)
            .chain(self.serving_sizes.keys().copied().map(AmountUnit::Measure))
            .collect()
    }

    pub fn cost_per_serving(&self) -> Option<f64> {
        self.cost.map(|c| c.per_serving())
    }
}
