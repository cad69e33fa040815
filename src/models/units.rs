// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Serving units and user-entered amounts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Units a serving size may be measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Items,
    Oz,
    Lbs,
    G,
    Mg,
    Kg,
    Cup,
    Pint,
    Quart,
    Gallon,
    Ml,
    L,
    Tsp,
    Tbsp,
}

impl Unit {
    /// Every unit in the order shown in drop-downs.
    pub const ALL: [Unit; 14] = [
        Unit::Items,
        Unit::Oz,
        Unit::Lbs,
        Unit::G,
        Unit::Mg,
        Unit::Kg,
        Unit::Cup,
        Unit::Pint,
        Unit::Quart,
        Unit::Gallon,
        Unit::Ml,
        Unit::L,
        Unit::Tsp,
        Unit::Tbsp,
    ];

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Items => "item(s)",
            Unit::Oz => "oz",
            Unit::Lbs => "lbs",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::Kg => "kg",
            Unit::Cup => "cup",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Ml => "mL",
            Unit::L => "L",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of a logged amount: whole servings, or one of the food's serving units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountUnit {
    #[default]
    Servings,
    Measure(Unit),
}

impl fmt::Display for AmountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountUnit::Servings => f.write_str("Serving(s)"),
            AmountUnit::Measure(unit) => unit.fmt(f),
        }
    }
}

/// Quantity the user consumed, expressed in `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub quantity: f64,
    pub unit: AmountUnit,
}

impl Amount {
    pub fn new(quantity: f64, unit: AmountUnit) -> Self {
        Self { quantity, unit }
    }

    #[cfg(test)]
    pub fn servings(quantity: f64) -> Self {
        Self::new(quantity, AmountUnit::Servings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_form_choices() {
        assert_eq!(Unit::Items.label(), "item(s)");
        assert_eq!(Unit::Ml.to_string(), "mL");
        assert_eq!(AmountUnit::Servings.to_string(), "Serving(s)");
        assert_eq!(AmountUnit::Measure(Unit::Tbsp).to_string(), "tbsp");
    }

    #[test]
    fn amount_unit_serializes_compactly() {
        let json = serde_json::to_string(&Amount::new(2.0, AmountUnit::Measure(Unit::G))).unwrap();
        assert_eq!(json, r#"{"quantity":2.0,"unit":{"measure":"g"}}"#);

        let json = serde_json::to_string(&Amount::servings(1.5)).unwrap();
        assert_eq!(json, r#"{"quantity":1.5,"unit":"servings"}"#);
    }
}
