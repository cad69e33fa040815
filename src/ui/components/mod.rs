// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Reusable egui components structured for MVU-style updates.

pub mod entry_editor;
pub mod food_form;
pub mod food_table;
pub mod log_date;
pub mod log_table;
pub mod selection;
pub mod totals_table;
