// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Rounding and display helpers for nutrition and cost values.

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Format a value with at most two decimals, dropping trailing zeros
/// (`2.50` -> `2.5`, `3.00` -> `3`).
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", round_to(value, 2));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Format a dollar amount with exactly two decimals.
pub fn format_cost(value: f64) -> String {
    format!("{:.2}", round_to(value, 2))
}

/// Display helper for optional values: blank when missing.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}
