// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Shared helper utilities reused by UI and business logic.

pub mod number;

/// Round to a fixed number of decimal places.
pub use number::round_to;
/// Display helpers for numbers and dollar amounts.
pub use number::{format_cost, format_number, format_optional};
