// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Validation for food dictionary input. Pure: uniqueness against stored items is the store's job.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::models::{Cost, FoodItem, Nutrient, Nutrients, Unit};

/// How many serving-size rows the form offers.
pub const SERVING_SLOTS: usize = 3;

/// Raw text from the add/edit food form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    /// Amount text and unit for each serving-size row; blank rows are skipped.
    pub serving_sizes: Vec<(String, Unit)>,
    /// Text for each nutrient, indexed like [`Nutrient::ALL`].
    pub nutrients: [String; Nutrient::COUNT],
    pub total_price: String,
    pub servings_per_container: String,
}

impl FoodDraft {
    /// Pre-fill a draft from an existing item for editing. Values keep full precision so
    /// saving an unchanged form stores exactly what was there.
    pub fn from_item(item: &FoodItem) -> Self {
        let mut nutrients: [String; Nutrient::COUNT] = Default::default();
        for (nutrient, value) in item.nutrients.iter() {
            nutrients[nutrient.index()] = value.to_string();
        }
        let (total_price, servings_per_container) = match item.cost {
            Some(cost) => (
                cost.total_price.to_string(),
                cost.servings_per_container.to_string(),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            name: item.name.clone(),
            serving_sizes: item
                .serving_sizes
                .iter()
                .map(|(unit, amount)| (amount.to_string(), *unit))
                .collect(),
            nutrients,
            total_price,
            servings_per_container,
        }
    }
}

/// Parse optional numeric input: blank is `Ok(None)`, anything that is not a finite,
/// non-negative number is `Err(())`.
pub(crate) fn parse_optional_number(text: &str) -> Result<Option<f64>, ()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(()),
    }
}

/// Validate a draft and build the food item it describes.
///
/// Checks run in form order so the first problem the user sees is the topmost one:
/// name, serving sizes, nutrients, then cost. When two serving rows use the same unit,
/// the later row wins.
pub fn build_food_item(draft: &FoodDraft) -> Result<FoodItem, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let mut serving_sizes = BTreeMap::new();
    for (amount, unit) in &draft.serving_sizes {
        match parse_optional_number(amount) {
            Ok(Some(v)) if v > 0.0 => {
                serving_sizes.insert(*unit, v);
            }
            Ok(None) => continue,
            _ => return Err(ValidationError::InvalidServingSize),
        }
    }
    if serving_sizes.is_empty() {
        return Err(ValidationError::MissingServingSize);
    }

    let mut nutrients = Nutrients::new();
    for nutrient in Nutrient::ALL {
        let value = parse_optional_number(&draft.nutrients[nutrient.index()])
            .map_err(|_| ValidationError::InvalidNutrient(nutrient.label()))?;
        nutrients.set(nutrient, value);
    }

    let cost = parse_cost(&draft.total_price, &draft.servings_per_container)?;

    Ok(FoodItem {
        name: name.to_string(),
        serving_sizes,
        nutrients,
        cost,
    })
}

fn parse_cost(total_price: &str, servings: &str) -> Result<Option<Cost>, ValidationError> {
    let price = parse_optional_number(total_price).map_err(|_| ValidationError::InvalidCost)?;
    let servings = parse_optional_number(servings).map_err(|_| ValidationError::InvalidCost)?;

    match (price, servings) {
        (None, None) => Ok(None),
        (Some(_), None) | (None, Some(_)) => Err(ValidationError::IncompleteCost),
        (Some(_), Some(s)) if s == 0.0 => Err(ValidationError::InvalidCost),
        (Some(p), Some(s)) => Ok(Some(Cost::new(p, s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.into(),
            serving_sizes: vec![("60".into(), Unit::G)],
            ..Default::default()
        }
    }

    #[test]
    fn builds_item_with_blanks_left_out() {
        let mut d = draft("  cereal ");
        d.nutrients[Nutrient::Calories.index()] = "200".into();
        d.nutrients[Nutrient::TotalFat.index()] = "1.5".into();
        d.total_price = "2.00".into();
        d.servings_per_container = "8".into();

        let item = build_food_item(&d).unwrap();

        assert_eq!(item.name, "cereal");
        assert_eq!(item.serving_size(Unit::G), Some(60.0));
        assert_eq!(item.nutrients.get(Nutrient::Calories), Some(200.0));
        assert_eq!(item.nutrients.get(Nutrient::Protein), None);
        assert_eq!(item.cost_per_serving(), Some(0.25));
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            build_food_item(&draft("   ")),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn at_least_one_serving_size_is_required() {
        let mut d = draft("oats");
        d.serving_sizes = vec![(String::new(), Unit::G), ("  ".into(), Unit::Cup)];
        assert_eq!(
            build_food_item(&d),
            Err(ValidationError::MissingServingSize)
        );
    }

    #[test]
    fn serving_size_must_be_positive_number() {
        let mut d = draft("oats");
        d.serving_sizes = vec![("abc".into(), Unit::G)];
        assert_eq!(
            build_food_item(&d),
            Err(ValidationError::InvalidServingSize)
        );

        d.serving_sizes = vec![("0".into(), Unit::G)];
        assert_eq!(
            build_food_item(&d),
            Err(ValidationError::InvalidServingSize)
        );
    }

    #[test]
    fn nutrient_errors_name_the_field() {
        let mut d = draft("oats");
        d.nutrients[Nutrient::Sodium.index()] = "-3".into();
        assert_eq!(
            build_food_item(&d),
            Err(ValidationError::InvalidNutrient("Sodium"))
        );
    }

    #[test]
    fn cost_needs_both_fields() {
        let mut d = draft("oats");
        d.total_price = "3.00".into();
        assert_eq!(build_food_item(&d), Err(ValidationError::IncompleteCost));

        d.total_price.clear();
        d.servings_per_container = "8".into();
        assert_eq!(build_food_item(&d), Err(ValidationError::IncompleteCost));
    }

    #[test]
    fn zero_servings_per_container_is_invalid() {
        let mut d = draft("oats");
        d.total_price = "3.00".into();
        d.servings_per_container = "0".into();
        assert_eq!(build_food_item(&d), Err(ValidationError::InvalidCost));
    }

    #[test]
    fn later_serving_row_wins_for_same_unit() {
        let mut d = draft("oats");
        d.serving_sizes = vec![("40".into(), Unit::G), ("45".into(), Unit::G)];
        let item = build_food_item(&d).unwrap();
        assert_eq!(item.serving_size(Unit::G), Some(45.0));
    }

    #[test]
    fn draft_round_trips_through_edit_form() {
        let mut d = draft("chocolate");
        d.serving_sizes.push(("1".into(), Unit::Items));
        d.total_price = "2.23".into();
        d.servings_per_container = "5".into();
        let item = build_food_item(&d).unwrap();

        let rebuilt = build_food_item(&FoodDraft::from_item(&item)).unwrap();

        assert_eq!(rebuilt, item);
    }

    #[test]
    fn edit_form_keeps_full_precision() {
        let mut d = draft("vanilla");
        d.serving_sizes = vec![("0.125".into(), Unit::Tsp)];
        d.nutrients[Nutrient::TotalFat.index()] = "0.125".into();
        d.total_price = "2.999".into();
        d.servings_per_container = "2.333".into();
        let item = build_food_item(&d).unwrap();

        let draft = FoodDraft::from_item(&item);
        assert_eq!(draft.serving_sizes, vec![("0.125".to_string(), Unit::Tsp)]);
        assert_eq!(draft.total_price, "2.999");

        let rebuilt = build_food_item(&draft).unwrap();
        assert_eq!(rebuilt, item);
        assert_eq!(rebuilt.serving_size(Unit::Tsp), Some(0.125));
    }
}
