// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Turn user-entered amounts into log entries.
//!
//! If a food's serving size is 56 g and the user ate 112 g, that is two servings, so every
//! nutrient and the cost per serving are multiplied by two.

use crate::error::ValidationError;
use crate::models::{Amount, AmountUnit, FoodItem, LogEntry};
use crate::utils::round_to;

use super::dictionary::parse_optional_number;

/// Parse the amount typed for `food`.
///
/// # Errors
///
/// [`ValidationError::MissingAmount`] when blank and [`ValidationError::InvalidAmount`] when
/// not a non-negative number.
pub fn parse_amount(food: &str, text: &str, unit: AmountUnit) -> Result<Amount, ValidationError> {
    match parse_optional_number(text) {
        Ok(Some(quantity)) => Ok(Amount::new(quantity, unit)),
        Ok(None) => Err(ValidationError::MissingAmount(food.to_string())),
        Err(()) => Err(ValidationError::InvalidAmount(food.to_string())),
    }
}

/// Number of servings `amount` represents for `food`.
pub fn servings_for(food: &FoodItem, amount: Amount) -> Result<f64, ValidationError> {
    match amount.unit {
        AmountUnit::Servings => Ok(amount.quantity),
        AmountUnit::Measure(unit) => food
            .serving_size(unit)
            .map(|size| amount.quantity / size)
            .ok_or_else(|| ValidationError::UnsupportedUnit {
                food: food.name.clone(),
                unit: unit.to_string(),
            }),
    }
}

/// Build the log entry for eating `amount` of `food`.
pub fn calculate_entry(food: &FoodItem, amount: Amount) -> Result<LogEntry, ValidationError> {
    let servings = servings_for(food, amount)?;
    Ok(scaled_entry(food, amount, servings))
}

/// Lenient variant for live tallies while the user is still typing: blank or invalid amounts
/// weigh nothing.
pub fn preview_entry(food: &FoodItem, text: &str, unit: AmountUnit) -> LogEntry {
    let quantity = parse_optional_number(text).ok().flatten().unwrap_or(0.0);
    let amount = Amount::new(quantity, unit);
    let servings = servings_for(food, amount).unwrap_or(0.0);
    scaled_entry(food, amount, servings)
}

fn scaled_entry(food: &FoodItem, amount: Amount, servings: f64) -> LogEntry {
    LogEntry {
        food_name: food.name.clone(),
        amount,
        servings: round_to(servings, 2),
        nutrients: food.nutrients.scaled(servings),
        cost: food
            .cost_per_serving()
            .map(|per_serving| round_to(per_serving * servings, 2)),
    }
}
