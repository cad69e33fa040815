// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Business logic: input validation and nutrition/cost calculation, free of IO and UI.

pub mod dates;
pub mod dictionary;
pub mod entries;
