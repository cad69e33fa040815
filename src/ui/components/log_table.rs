// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! The day's log: one row per entry with a checkbox, plus "All" and "Selected" totals.

use chrono::NaiveDate;
use eframe::egui;

use crate::models::{LogEntry, Nutrient, Totals};
use crate::ui::components::selection::Selection;
use crate::ui::components::totals_table;
use crate::utils::{format_cost, format_number, format_optional};

#[derive(Clone, Debug, PartialEq)]
pub struct LogTableModel {
    date: NaiveDate,
    entries: Vec<LogEntry>,
    selection: Selection,
}

impl LogTableModel {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            selection: Selection::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Replace the shown log. The selection survives a reload of the same date.
    pub fn set_log(&mut self, date: NaiveDate, entries: Vec<LogEntry>) {
        if date != self.date {
            self.selection.clear();
        }
        self.date = date;
        self.entries = entries;
        self.selection
            .retain_present(self.entries.iter().map(|e| e.food_name.as_str()));
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selection.names()
    }

    pub fn all_selected(&self) -> bool {
        !self.entries.is_empty() && self.selection.len() == self.entries.len()
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.entries)
    }

    /// Totals over checked rows, `None` when nothing is checked.
    pub fn selected_totals(&self) -> Option<Totals> {
        if self.selection.is_empty() {
            return None;
        }
        Some(Totals::of(
            self.entries
                .iter()
                .filter(|e| self.selection.contains(&e.food_name)),
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTableMsg {
    Toggle(String),
    SelectAll,
    UnselectAll,
}

pub fn update(model: &mut LogTableModel, msg: LogTableMsg) {
    match msg {
        LogTableMsg::Toggle(name) => model.selection.toggle(&name),
        LogTableMsg::SelectAll => model
            .selection
            .select_all(model.entries.iter().map(|e| e.food_name.as_str())),
        LogTableMsg::UnselectAll => model.selection.clear(),
    }
}

pub fn view(ui: &mut egui::Ui, model: &LogTableModel) -> Vec<LogTableMsg> {
    let mut msgs = Vec::new();

    if model.entries.is_empty() {
        let hint = "There is no log for this date yet. Click 'Add entries' to start one.";
        ui.label(
            egui::RichText::new(hint)
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
    } else {
        egui::ScrollArea::both()
            .id_salt("log_table_scroll")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                egui::Grid::new("log_table")
                    .striped(true)
                    .spacing(egui::vec2(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("Amount");
                        for label in totals_table::column_labels() {
                            ui.strong(label);
                        }
                        ui.end_row();

                        for entry in &model.entries {
                            let mut checked = model.selection.contains(&entry.food_name);
                            if ui.checkbox(&mut checked, entry.food_name.as_str()).changed() {
                                msgs.push(LogTableMsg::Toggle(entry.food_name.clone()));
                            }
                            ui.label(entry.amount_label());
                            for nutrient in Nutrient::ALL {
                                ui.label(format_optional(entry.nutrients.get(nutrient)));
                            }
                            ui.label(entry.cost.map(format_cost).unwrap_or_default());
                            ui.end_row();
                        }
                    });
            });
    }

    ui.add_space(8.0);
    let all = (!model.entries.is_empty()).then(|| model.totals());
    totals_table::view(
        ui,
        "log_totals",
        &[
            ("All entries", all),
            ("Selected entries", model.selected_totals()),
        ],
    );

    if let Some(selected) = model.selected_totals() {
        ui.label(
            egui::RichText::new(format!(
                "{} of {} entries selected, {} calories",
                selected.entry_count(),
                model.entries.len(),
                format_number(selected.nutrient(Nutrient::Calories)),
            ))
            .small()
            .color(egui::Color32::from_gray(110)),
        );
    }

    msgs
}
