// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Food dictionary listing with per-row selection.

use eframe::egui;

use crate::models::{FoodItem, Nutrient};
use crate::ui::components::selection::Selection;
use crate::utils::{format_cost, format_number, format_optional};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodTableModel {
    foods: Vec<FoodItem>,
    selection: Selection,
}

impl FoodTableModel {
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn food(&self, name: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.name == name)
    }

    pub fn set_foods(&mut self, foods: Vec<FoodItem>) {
        self.foods = foods;
        self.selection
            .retain_present(self.foods.iter().map(|f| f.name.as_str()));
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selection.names()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FoodTableMsg {
    Toggle(String),
    SelectAll,
    UnselectAll,
}

pub fn update(model: &mut FoodTableModel, msg: FoodTableMsg) {
    match msg {
        FoodTableMsg::Toggle(name) => model.selection.toggle(&name),
        FoodTableMsg::SelectAll => model
            .selection
            .select_all(model.foods.iter().map(|f| f.name.as_str())),
        FoodTableMsg::UnselectAll => model.selection.clear(),
    }
}

/// "56 g, 0.5 cup" style summary of a food's serving sizes.
pub fn serving_sizes_label(food: &FoodItem) -> String {
    food.serving_sizes
        .iter()
        .map(|(unit, amount)| format!("{} {unit}", format_number(*amount)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn view(ui: &mut egui::Ui, model: &FoodTableModel) -> Vec<FoodTableMsg> {
    let mut msgs = Vec::new();

    if model.foods.is_empty() {
        ui.label(
            egui::RichText::new("There are currently no entries in the food dictionary.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    egui::ScrollArea::both()
        .id_salt("food_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("food_table")
                .striped(true)
                .spacing(egui::vec2(12.0, 6.0))
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Serving size");
                    for nutrient in Nutrient::ALL {
                        ui.strong(nutrient.short_label());
                    }
                    ui.strong("Price ($)");
                    ui.strong("Servings / container");
                    ui.strong("Cost / serving ($)");
                    ui.end_row();

                    for food in &model.foods {
                        let mut checked = model.selection.contains(&food.name);
                        if ui.checkbox(&mut checked, food.name.as_str()).changed() {
                            msgs.push(FoodTableMsg::Toggle(food.name.clone()));
                        }
                        ui.label(serving_sizes_label(food));
                        for nutrient in Nutrient::ALL {
                            ui.label(format_optional(food.nutrients.get(nutrient)));
                        }
                        match food.cost {
                            Some(cost) => {
                                ui.label(format_cost(cost.total_price));
                                ui.label(format_number(cost.servings_per_container));
                                ui.label(format!("{:.3}", cost.per_serving()));
                            }
                            None => {
                                ui.label("");
                                ui.label("");
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    msgs
}
