// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Nutrition facts as a sparse map: a missing value means "not on the label", not zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::round_to;

/// Nutritional fields tracked per food item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    PolyunsaturatedFat,
    MonounsaturatedFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrate,
    DietaryFiber,
    SolubleFiber,
    InsolubleFiber,
    TotalSugars,
    AddedSugars,
    Protein,
}

impl Nutrient {
    pub const COUNT: usize = 15;

    /// Label order, matching a nutrition facts panel.
    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Calories,
        Nutrient::TotalFat,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::PolyunsaturatedFat,
        Nutrient::MonounsaturatedFat,
        Nutrient::Cholesterol,
        Nutrient::Sodium,
        Nutrient::TotalCarbohydrate,
        Nutrient::DietaryFiber,
        Nutrient::SolubleFiber,
        Nutrient::InsolubleFiber,
        Nutrient::TotalSugars,
        Nutrient::AddedSugars,
        Nutrient::Protein,
    ];

    /// Position in [`Nutrient::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::TotalFat => "Total Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::TransFat => "Trans Fat",
            Nutrient::PolyunsaturatedFat => "Polyunsaturated Fat",
            Nutrient::MonounsaturatedFat => "Monounsaturated Fat",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Sodium => "Sodium",
            Nutrient::TotalCarbohydrate => "Total Carbohydrate",
            Nutrient::DietaryFiber => "Dietary Fiber",
            Nutrient::SolubleFiber => "Soluble Fiber",
            Nutrient::InsolubleFiber => "Insoluble Fiber",
            Nutrient::TotalSugars => "Total Sugars",
            Nutrient::AddedSugars => "Added Sugars",
            Nutrient::Protein => "Protein",
        }
    }

    /// Compact column header for tables.
    pub fn short_label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Cal.",
            Nutrient::TotalFat => "Fat (g)",
            Nutrient::SaturatedFat => "Sat. Fat (g)",
            Nutrient::TransFat => "Trans Fat (g)",
            Nutrient::PolyunsaturatedFat => "Poly. Fat (g)",
            Nutrient::MonounsaturatedFat => "Mono. Fat (g)",
            Nutrient::Cholesterol => "Chol. (mg)",
            Nutrient::Sodium => "Sodium (mg)",
            Nutrient::TotalCarbohydrate => "Carbs (g)",
            Nutrient::DietaryFiber => "Fiber (g)",
            Nutrient::SolubleFiber => "Sol. Fiber (g)",
            Nutrient::InsolubleFiber => "Insol. Fiber (g)",
            Nutrient::TotalSugars => "Sugars (g)",
            Nutrient::AddedSugars => "Added Sugars (g)",
            Nutrient::Protein => "Protein (g)",
        }
    }

    /// Measurement unit, empty for calories.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "",
            Nutrient::Cholesterol | Nutrient::Sodium => "mg",
            _ => "g",
        }
    }
}

/// Nutrient values for one serving (food items) or one logged amount (log entries).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrients {
    values: BTreeMap<Nutrient, f64>,
}

impl Nutrients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).copied()
    }

    /// Set or clear a value.
    pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
        match value {
            Some(v) => {
                self.values.insert(nutrient, v);
            }
            None => {
                self.values.remove(&nutrient);
            }
        }
    }

    /// Builder-style setter for fixtures.
    #[cfg(test)]
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.values.insert(nutrient, value);
        self
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present values in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.values.iter().map(|(n, v)| (*n, *v))
    }

    /// Multiply every present value by `factor`, rounding to two decimals.
    /// Missing values stay missing.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            values: self
                .values
                .iter()
                .map(|(n, v)| (*n, round_to(v * factor, 2)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, n) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
    }

    #[test]
    fn scaling_keeps_blanks_blank() {
        let per_serving = Nutrients::new()
            .with(Nutrient::Calories, 200.0)
            .with(Nutrient::TotalFat, 1.5);

        let scaled = per_serving.scaled(1.5);

        assert_eq!(scaled.get(Nutrient::Calories), Some(300.0));
        assert_eq!(scaled.get(Nutrient::TotalFat), Some(2.25));
        assert_eq!(scaled.get(Nutrient::Protein), None);
    }

    #[test]
    fn set_none_clears_value() {
        let mut n = Nutrients::new().with(Nutrient::Sodium, 10.0);
        n.set(Nutrient::Sodium, None);
        assert!(n.is_empty());
    }

    #[test]
    fn serializes_as_snake_case_map() {
        let n = Nutrients::new().with(Nutrient::TotalCarbohydrate, 48.0);
        assert_eq!(
            serde_json::to_string(&n).unwrap(),
            r#"{"total_carbohydrate":48.0}"#
        );
    }
}
