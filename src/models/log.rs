// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Dated consumption records.

use serde::{Deserialize, Serialize};

use crate::models::nutrients::Nutrients;
use crate::models::units::{Amount, AmountUnit};

/// One food eaten on a given day, with its nutrition and cost already scaled to the amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the referenced food dictionary entry.
    pub food_name: String,
    pub amount: Amount,
    /// Number of servings the amount works out to.
    pub servings: f64,
    #[serde(default)]
    pub nutrients: Nutrients,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl LogEntry {
    /// Human-readable amount, e.g. `112 g (2 servings)` or `1.5 serving(s)`.
    pub fn amount_label(&self) -> String {
        let servings = crate::utils::format_number(self.servings);
        match self.amount.unit {
            AmountUnit::Servings => format!("{servings} serving(s)"),
            AmountUnit::Measure(unit) => format!(
                "{} {} ({servings} serving(s))",
                crate::utils::format_number(self.amount.quantity),
                unit
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::Unit;

    fn entry(amount: Amount, servings: f64) -> LogEntry {
        LogEntry {
            food_name: "spaghetti".into(),
            amount,
            servings,
            nutrients: Nutrients::default(),
            cost: None,
        }
    }

    #[test]
    fn amount_label_shows_measure_and_servings() {
        let e = entry(Amount::new(112.0, AmountUnit::Measure(Unit::G)), 2.0);
        assert_eq!(e.amount_label(), "112 g (2 serving(s))");

        let e = entry(Amount::servings(1.5), 1.5);
        assert_eq!(e.amount_label(), "1.5 serving(s)");
    }
}
