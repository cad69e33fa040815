// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Dialog for adding log entries from the food dictionary or editing existing ones.
//!
//! Each row pairs a food with an amount and unit. Checked rows are tallied live, so the
//! dialog doubles as a meal planner: nothing is written until the user confirms.

use eframe::egui;

use crate::error::ValidationError;
use crate::logic::entries::{calculate_entry, parse_amount, preview_entry};
use crate::models::{AmountUnit, FoodItem, LogEntry, Totals};
use crate::ui::components::totals_table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    /// Checked rows are added to the log.
    Add,
    /// Every row replaces the log entry of the same name.
    Edit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub food: FoodItem,
    pub checked: bool,
    pub amount: String,
    pub unit: AmountUnit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryEditorModel {
    mode: EditorMode,
    rows: Vec<EntryRow>,
}

impl EntryEditorModel {
    /// One unchecked row per food in the dictionary.
    pub fn for_adding(foods: &[FoodItem]) -> Self {
        Self {
            mode: EditorMode::Add,
            rows: foods
                .iter()
                .map(|food| EntryRow {
                    food: food.clone(),
                    checked: false,
                    amount: String::new(),
                    unit: AmountUnit::Servings,
                })
                .collect(),
        }
    }

    /// Rows pre-filled with the amounts already logged.
    pub fn for_editing(pairs: impl IntoIterator<Item = (FoodItem, LogEntry)>) -> Self {
        Self {
            mode: EditorMode::Edit,
            rows: pairs
                .into_iter()
                .map(|(food, entry)| EntryRow {
                    food,
                    checked: true,
                    amount: entry.amount.quantity.to_string(),
                    unit: entry.amount.unit,
                })
                .collect(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    /// Live totals for checked rows. Blank or invalid amounts count as zero.
    pub fn preview_totals(&self) -> Option<Totals> {
        let previews: Vec<LogEntry> = self
            .rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| preview_entry(&r.food, &r.amount, r.unit))
            .collect();
        (!previews.is_empty()).then(|| Totals::of(&previews))
    }

    /// Strictly validated entries for the rows this mode commits.
    fn committed_entries(&self) -> Result<Vec<LogEntry>, ValidationError> {
        let rows: Vec<&EntryRow> = match self.mode {
            EditorMode::Add => self.rows.iter().filter(|r| r.checked).collect(),
            EditorMode::Edit => self.rows.iter().collect(),
        };
        if rows.is_empty() {
            return Err(ValidationError::NothingSelected);
        }

        rows.into_iter()
            .map(|row| {
                let amount = parse_amount(&row.food.name, &row.amount, row.unit)?;
                calculate_entry(&row.food, amount)
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryEditorMsg {
    Toggle(usize),
    AmountChanged { row: usize, text: String },
    UnitChanged { row: usize, unit: AmountUnit },
    SelectAll,
    UnselectAll,
    Submit,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntryEditorEvent {
    Add(Vec<LogEntry>),
    Update(Vec<LogEntry>),
    Invalid(String),
    Cancelled,
}

pub fn update(model: &mut EntryEditorModel, msg: EntryEditorMsg) -> Option<EntryEditorEvent> {
    match msg {
        EntryEditorMsg::Toggle(row) => {
            if let Some(r) = model.rows.get_mut(row) {
                r.checked = !r.checked;
            }
        }
        EntryEditorMsg::AmountChanged { row, text } => {
            if let Some(r) = model.rows.get_mut(row) {
                r.amount = text;
                // Typing an amount implies the row is wanted.
                r.checked |= !r.amount.trim().is_empty();
            }
        }
        EntryEditorMsg::UnitChanged { row, unit } => {
            if let Some(r) = model.rows.get_mut(row) {
                r.unit = unit;
            }
        }
        EntryEditorMsg::SelectAll => model.rows.iter_mut().for_each(|r| r.checked = true),
        EntryEditorMsg::UnselectAll => model.rows.iter_mut().for_each(|r| r.checked = false),
        EntryEditorMsg::Submit => {
            return Some(match model.committed_entries() {
                Ok(entries) if model.mode == EditorMode::Add => EntryEditorEvent::Add(entries),
                Ok(entries) => EntryEditorEvent::Update(entries),
                Err(err) => EntryEditorEvent::Invalid(err.to_string()),
            });
        }
        EntryEditorMsg::Cancel => return Some(EntryEditorEvent::Cancelled),
    }
    None
}

pub fn view(ctx: &egui::Context, model: &EntryEditorModel, enabled: bool) -> Vec<EntryEditorMsg> {
    let mut msgs = Vec::new();
    let (title, help) = match model.mode() {
        EditorMode::Add => (
            "Add Entries to Log",
            "Check the foods to add and give the amount eaten with its unit, then click \
             'Update log'. The totals show the checked rows only.",
        ),
        EditorMode::Edit => (
            "Edit Log Entries",
            "Change the amounts below, then click 'Update log'. Every row is saved whether or \
             not it is checked; the totals show the checked rows only.",
        ),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .default_width(720.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if !enabled {
                ui.disable();
            }
            ui.label(egui::RichText::new(help).color(egui::Color32::from_gray(110)));
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .id_salt("entry_editor_rows")
                .max_height(360.0)
                .show(ui, |ui| render_rows(ui, model, &mut msgs));

            ui.add_space(8.0);
            totals_table::view(
                ui,
                "entry_editor_totals",
                &[("Selected entries", model.preview_totals())],
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    msgs.push(EntryEditorMsg::Cancel);
                }
                if ui.button("Select all entries").clicked() {
                    msgs.push(EntryEditorMsg::SelectAll);
                }
                if ui.button("Unselect all entries").clicked() {
                    msgs.push(EntryEditorMsg::UnselectAll);
                }
                if ui
                    .button(format!("{} Update log", egui_phosphor::regular::CHECK))
                    .clicked()
                {
                    msgs.push(EntryEditorMsg::Submit);
                }
            });
        });

    msgs
}

fn render_rows(ui: &mut egui::Ui, model: &EntryEditorModel, msgs: &mut Vec<EntryEditorMsg>) {
    egui::Grid::new("entry_editor_grid")
        .num_columns(3)
        .striped(true)
        .spacing(egui::vec2(12.0, 6.0))
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Amount");
            ui.strong("Weight/Volume");
            ui.end_row();

            for (i, row) in model.rows().iter().enumerate() {
                let mut checked = row.checked;
                if ui.checkbox(&mut checked, row.food.name.as_str()).changed() {
                    msgs.push(EntryEditorMsg::Toggle(i));
                }

                let mut text = row.amount.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut text).desired_width(60.0))
                    .changed()
                {
                    msgs.push(EntryEditorMsg::AmountChanged { row: i, text });
                }

                let mut unit = row.unit;
                egui::ComboBox::from_id_salt(("entry_unit", i))
                    .width(100.0)
                    .selected_text(unit.to_string())
                    .show_ui(ui, |ui| {
                        for option in row.food.amount_units() {
                            ui.selectable_value(&mut unit, option, option.to_string());
                        }
                    });
                if unit != row.unit {
                    msgs.push(EntryEditorMsg::UnitChanged { row: i, unit });
                }
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Amount, Cost, Nutrient, Nutrients, Unit};

    fn foods() -> Vec<FoodItem> {
        vec![
            FoodItem {
                name: "cereal".into(),
                serving_sizes: BTreeMap::from([(Unit::G, 60.0)]),
                nutrients: Nutrients::new().with(Nutrient::Calories, 200.0),
                cost: Some(Cost::new(2.0, 8.0)),
            },
            FoodItem {
                name: "milk".into(),
                serving_sizes: BTreeMap::from([(Unit::Cup, 1.0)]),
                nutrients: Nutrients::new().with(Nutrient::Calories, 100.0),
                cost: None,
            },
        ]
    }

    #[test]
    fn preview_tallies_checked_rows_while_typing() {
        let mut model = EntryEditorModel::for_adding(&foods());
        assert!(model.preview_totals().is_none());

        update(
            &mut model,
            EntryEditorMsg::AmountChanged {
                row: 0,
                text: "120".into(),
            },
        );
        update(
            &mut model,
            EntryEditorMsg::UnitChanged {
                row: 0,
                unit: AmountUnit::Measure(Unit::G),
            },
        );
        update(&mut model, EntryEditorMsg::Toggle(1));

        let totals = model.preview_totals().unwrap();
        assert_eq!(totals.nutrient(Nutrient::Calories), 400.0);
        assert_eq!(totals.cost(), 0.5);
    }

    #[test]
    fn adding_requires_a_checked_row() {
        let mut model = EntryEditorModel::for_adding(&foods());
        assert_eq!(
            update(&mut model, EntryEditorMsg::Submit),
            Some(EntryEditorEvent::Invalid(ValidationError::NothingSelected.to_string()))
        );
    }

    #[test]
    fn checked_row_without_amount_is_rejected() {
        let mut model = EntryEditorModel::for_adding(&foods());
        update(&mut model, EntryEditorMsg::Toggle(1));

        match update(&mut model, EntryEditorMsg::Submit) {
            Some(EntryEditorEvent::Invalid(message)) => assert!(message.contains("'milk'")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn add_commits_only_checked_rows() {
        let mut model = EntryEditorModel::for_adding(&foods());
        update(
            &mut model,
            EntryEditorMsg::AmountChanged {
                row: 1,
                text: "2".into(),
            },
        );

        match update(&mut model, EntryEditorMsg::Submit) {
            Some(EntryEditorEvent::Add(entries)) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].food_name, "milk");
                assert_eq!(entries[0].servings, 2.0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn edit_commits_every_row_even_unchecked() {
        let foods = foods();
        let logged = calculate_entry(&foods[0], Amount::servings(1.0)).unwrap();
        let mut model = EntryEditorModel::for_editing([(foods[0].clone(), logged)]);
        assert_eq!(model.rows()[0].amount, "1");

        update(&mut model, EntryEditorMsg::UnselectAll);
        update(
            &mut model,
            EntryEditorMsg::AmountChanged {
                row: 0,
                text: "3".into(),
            },
        );
        update(&mut model, EntryEditorMsg::Toggle(0));

        match update(&mut model, EntryEditorMsg::Submit) {
            Some(EntryEditorEvent::Update(entries)) => {
                assert_eq!(entries[0].servings, 3.0);
                assert_eq!(entries[0].nutrients.get(Nutrient::Calories), Some(600.0));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
