// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Field-wise sums over log entries. Always derived, never stored.

use crate::models::log::LogEntry;
use crate::models::nutrients::Nutrient;
use crate::utils::round_to;

/// Summed nutrition and cost. Missing values contribute zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    nutrients: [f64; Nutrient::COUNT],
    cost: f64,
    entries: usize,
}

impl Totals {
    /// Sum over any set of entries (a whole log, or just the selected rows).
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals.round();
        totals
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients[nutrient.index()]
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// How many entries went into the sum.
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    fn add(&mut self, entry: &LogEntry) {
        for (nutrient, value) in entry.nutrients.iter() {
            self.nutrients[nutrient.index()] += value;
        }
        self.cost += entry.cost.unwrap_or(0.0);
        self.entries += 1;
    }

    fn round(&mut self) {
        for v in self.nutrients.iter_mut() {
            *v = round_to(*v, 2);
        }
        self.cost = round_to(self.cost, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nutrients::Nutrients;
    use crate::models::units::Amount;

    fn entry(name: &str, nutrients: Nutrients, cost: Option<f64>) -> LogEntry {
        LogEntry {
            food_name: name.into(),
            amount: Amount::servings(1.0),
            servings: 1.0,
            nutrients,
            cost,
        }
    }

    #[test]
    fn empty_set_sums_to_zero() {
        let totals = Totals::of(&[] as &[LogEntry]);
        for n in Nutrient::ALL {
            assert_eq!(totals.nutrient(n), 0.0);
        }
        assert_eq!(totals.cost(), 0.0);
        assert_eq!(totals.entry_count(), 0);
    }

    #[test]
    fn blanks_count_as_zero() {
        let entries = vec![
            entry(
                "cereal",
                Nutrients::new()
                    .with(Nutrient::Calories, 300.0)
                    .with(Nutrient::Protein, 10.5),
                Some(0.38),
            ),
            entry("chocolate", Nutrients::new(), Some(1.34)),
            entry(
                "peanut butter",
                Nutrients::new().with(Nutrient::Calories, 190.0),
                None,
            ),
        ];

        let totals = Totals::of(&entries);

        assert_eq!(totals.nutrient(Nutrient::Calories), 490.0);
        assert_eq!(totals.nutrient(Nutrient::Protein), 10.5);
        assert_eq!(totals.nutrient(Nutrient::Sodium), 0.0);
        assert_eq!(totals.cost(), 1.72);
        assert_eq!(totals.entry_count(), 3);
    }

    #[test]
    fn subset_only_sums_selected_entries() {
        let entries = vec![
            entry(
                "a",
                Nutrients::new().with(Nutrient::Calories, 100.0),
                Some(0.1),
            ),
            entry(
                "b",
                Nutrients::new().with(Nutrient::Calories, 50.0),
                Some(0.2),
            ),
        ];

        let totals = Totals::of(entries.iter().filter(|e| e.food_name == "b"));

        assert_eq!(totals.nutrient(Nutrient::Calories), 50.0);
        assert_eq!(totals.cost(), 0.2);
    }
}
