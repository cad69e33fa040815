// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Read-only grid of nutrition and cost totals.

use eframe::egui;

use crate::models::{Nutrient, Totals};
use crate::utils::{format_cost, format_number};

/// Column headers shared by every nutrition table, cost last.
pub fn column_labels() -> impl Iterator<Item = &'static str> {
    Nutrient::ALL
        .into_iter()
        .map(Nutrient::short_label)
        .chain(std::iter::once("Cost ($)"))
}

/// Display strings for one totals row, in [`column_labels`] order.
pub fn row_cells(totals: &Totals) -> Vec<String> {
    Nutrient::ALL
        .into_iter()
        .map(|n| format_number(totals.nutrient(n)))
        .chain(std::iter::once(format_cost(totals.cost())))
        .collect()
}

/// Render labelled totals rows. A `None` row is shown blank.
pub fn view(ui: &mut egui::Ui, id: &str, rows: &[(&str, Option<Totals>)]) {
    egui::ScrollArea::horizontal()
        .id_salt(format!("{id}_scroll"))
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .spacing(egui::vec2(12.0, 6.0))
                .show(ui, |ui| {
                    ui.strong("Totals");
                    for label in column_labels() {
                        ui.strong(label);
                    }
                    ui.end_row();

                    for (label, totals) in rows {
                        ui.label(*label);
                        match totals {
                            Some(totals) => {
                                for cell in row_cells(totals) {
                                    ui.label(cell);
                                }
                            }
                            None => {
                                for _ in column_labels() {
                                    ui.label("");
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
