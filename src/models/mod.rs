// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Domain layer: pure data types shared between the store, calculation logic, and UI.

pub mod food;
pub mod log;
pub mod nutrients;
pub mod totals;
pub mod units;

pub use food::{Cost, FoodItem};
pub use log::LogEntry;
pub use nutrients::{Nutrient, Nutrients};
pub use totals::Totals;
pub use units::{Amount, AmountUnit, Unit};
