// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Add/edit food dialog.

use eframe::egui;

use crate::logic::dictionary::{FoodDraft, SERVING_SLOTS, build_food_item};
use crate::models::{FoodItem, Nutrient, Unit};

/// Open dialog state. `original` is the name being edited, `None` when adding.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodFormModel {
    original: Option<String>,
    draft: FoodDraft,
}

impl FoodFormModel {
    pub fn for_adding() -> Self {
        Self {
            original: None,
            draft: padded(FoodDraft::default()),
        }
    }

    pub fn for_editing(item: &FoodItem) -> Self {
        Self {
            original: Some(item.name.clone()),
            draft: padded(FoodDraft::from_item(item)),
        }
    }

    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn draft(&self) -> &FoodDraft {
        &self.draft
    }
}

/// The dialog always shows every serving row, blank ones included.
fn padded(mut draft: FoodDraft) -> FoodDraft {
    draft.serving_sizes.truncate(SERVING_SLOTS);
    while draft.serving_sizes.len() < SERVING_SLOTS {
        draft.serving_sizes.push((String::new(), Unit::ALL[0]));
    }
    draft
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FoodFormMsg {
    NameChanged(String),
    ServingAmountChanged { slot: usize, text: String },
    ServingUnitChanged { slot: usize, unit: Unit },
    NutrientChanged { nutrient: Nutrient, text: String },
    PriceChanged(String),
    ServingsPerContainerChanged(String),
    Submit,
    Cancel,
}

/// Outcome the parent needs to act on.
#[derive(Clone, Debug, PartialEq)]
pub enum FoodFormEvent {
    Save {
        original: Option<String>,
        item: FoodItem,
    },
    Invalid(String),
    Cancelled,
}

pub fn update(model: &mut FoodFormModel, msg: FoodFormMsg) -> Option<FoodFormEvent> {
    let draft = &mut model.draft;
    match msg {
        FoodFormMsg::NameChanged(text) => draft.name = text,
        FoodFormMsg::ServingAmountChanged { slot, text } => {
            if let Some(row) = draft.serving_sizes.get_mut(slot) {
                row.0 = text;
            }
        }
        FoodFormMsg::ServingUnitChanged { slot, unit } => {
            if let Some(row) = draft.serving_sizes.get_mut(slot) {
                row.1 = unit;
            }
        }
        FoodFormMsg::NutrientChanged { nutrient, text } => draft.nutrients[nutrient.index()] = text,
        FoodFormMsg::PriceChanged(text) => draft.total_price = text,
        FoodFormMsg::ServingsPerContainerChanged(text) => draft.servings_per_container = text,
        FoodFormMsg::Submit => {
            return Some(match build_food_item(draft) {
                Ok(item) => FoodFormEvent::Save {
                    original: model.original.clone(),
                    item,
                },
                Err(err) => FoodFormEvent::Invalid(err.to_string()),
            });
        }
        FoodFormMsg::Cancel => return Some(FoodFormEvent::Cancelled),
    }
    None
}

/// `enabled` is false while another dialog sits on top.
pub fn view(ctx: &egui::Context, model: &FoodFormModel, enabled: bool) -> Vec<FoodFormMsg> {
    let mut msgs = Vec::new();
    let title = if model.original().is_some() {
        "Edit Food Dictionary Entry"
    } else {
        "Add Food Dictionary Entry"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if !enabled {
                ui.disable();
            }
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    render_fields(ui, model.draft(), &mut msgs);
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    msgs.push(FoodFormMsg::Cancel);
                }
                let done = if model.original().is_some() {
                    format!("{} Save changes", egui_phosphor::regular::FLOPPY_DISK)
                } else {
                    format!("{} Add to food dictionary", egui_phosphor::regular::PLUS)
                };
                if ui.button(done).clicked() {
                    msgs.push(FoodFormMsg::Submit);
                }
            });
        });

    msgs
}

fn render_fields(ui: &mut egui::Ui, draft: &FoodDraft, msgs: &mut Vec<FoodFormMsg>) {
    egui::Grid::new("food_form_grid")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 8.0))
        .min_col_width(160.0)
        .show(ui, |ui| {
            ui.label("Name");
            let mut name = draft.name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut name).hint_text("e.g., Rolled oats"))
                .changed()
            {
                msgs.push(FoodFormMsg::NameChanged(name));
            }
            ui.end_row();

            for (slot, (amount, unit)) in draft.serving_sizes.iter().enumerate() {
                ui.label(if slot == 0 {
                    "Serving size"
                } else {
                    "Alternate serving size"
                });
                ui.horizontal(|ui| {
                    let mut text = amount.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut text).desired_width(70.0))
                        .changed()
                    {
                        msgs.push(FoodFormMsg::ServingAmountChanged { slot, text });
                    }
                    let mut chosen = *unit;
                    egui::ComboBox::from_id_salt(("serving_unit", slot))
                        .width(90.0)
                        .selected_text(chosen.label())
                        .show_ui(ui, |ui| {
                            for option in Unit::ALL {
                                ui.selectable_value(&mut chosen, option, option.label());
                            }
                        });
                    if chosen != *unit {
                        msgs.push(FoodFormMsg::ServingUnitChanged { slot, unit: chosen });
                    }
                });
                ui.end_row();
            }

            for nutrient in Nutrient::ALL {
                let label = match nutrient.unit() {
                    "" => nutrient.label().to_string(),
                    unit => format!("{} ({unit})", nutrient.label()),
                };
                ui.label(label);
                let mut text = draft.nutrients[nutrient.index()].clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut text).desired_width(70.0))
                    .changed()
                {
                    msgs.push(FoodFormMsg::NutrientChanged { nutrient, text });
                }
                ui.end_row();
            }

            ui.label("Total price ($)");
            let mut price = draft.total_price.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut price).desired_width(70.0))
                .changed()
            {
                msgs.push(FoodFormMsg::PriceChanged(price));
            }
            ui.end_row();

            ui.label("Servings per container");
            let mut servings = draft.servings_per_container.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut servings).desired_width(70.0))
                .changed()
            {
                msgs.push(FoodFormMsg::ServingsPerContainerChanged(servings));
            }
            ui.end_row();
        });

    ui.label(
        egui::RichText::new("Leave nutrition fields blank when unknown. Cost is optional.")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cost;

    #[test]
    fn add_form_offers_every_serving_slot() {
        let model = FoodFormModel::for_adding();
        assert_eq!(model.draft().serving_sizes.len(), SERVING_SLOTS);
        assert!(model.original().is_none());
    }

    #[test]
    fn submit_builds_item_from_edits() {
        let mut model = FoodFormModel::for_adding();
        for msg in [
            FoodFormMsg::NameChanged("oats".into()),
            FoodFormMsg::ServingAmountChanged {
                slot: 1,
                text: "40".into(),
            },
            FoodFormMsg::ServingUnitChanged {
                slot: 1,
                unit: Unit::G,
            },
            FoodFormMsg::NutrientChanged {
                nutrient: Nutrient::Calories,
                text: "150".into(),
            },
        ] {
            assert!(update(&mut model, msg).is_none());
        }

        match update(&mut model, FoodFormMsg::Submit) {
            Some(FoodFormEvent::Save { original, item }) => {
                assert!(original.is_none());
                assert_eq!(item.name, "oats");
                assert_eq!(item.serving_size(Unit::G), Some(40.0));
                assert_eq!(item.nutrients.get(Nutrient::Calories), Some(150.0));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn invalid_input_is_reported() {
        let mut model = FoodFormModel::for_adding();
        let event = update(&mut model, FoodFormMsg::Submit);
        assert_eq!(
            event,
            Some(FoodFormEvent::Invalid("Please provide a name for the entry.".into()))
        );
    }

    #[test]
    fn edit_form_remembers_original_name() {
        let mut item = FoodItem::new(
            "cereal",
            std::collections::BTreeMap::from([(Unit::G, 56.0)]),
        );
        item.cost = Some(Cost::new(3.5, 7.0));
        let mut model = FoodFormModel::for_editing(&item);
        update(&mut model, FoodFormMsg::NameChanged("granola".into()));

        match update(&mut model, FoodFormMsg::Submit) {
            Some(FoodFormEvent::Save { original, item }) => {
                assert_eq!(original.as_deref(), Some("cereal"));
                assert_eq!(item.name, "granola");
                assert_eq!(item.cost_per_serving(), Some(0.5));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
