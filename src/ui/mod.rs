// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Top-level egui application shell for the log and food dictionary screens.
//! Handles layout and modal dialogs, and feeds view messages into the MVU kernel.

pub mod components;

use chrono::NaiveDate;
use eframe::egui;
use egui_phosphor::regular as icons;

use crate::logic::dates::long_date;
use crate::mvu::{self, AppModel, Direction, Msg, Screen};
use crate::store::Store;
use crate::ui::components::{entry_editor, food_form, food_table, log_date, log_table};

const HELP_TEXT: &[&str] = &[
    "Enter the date of the log you would like to view or edit, then click 'Change log'. \
     Today's date is selected by default, and 'Previous log' and 'Next log' jump to the \
     nearest saved log.",
    "The food dictionary is used to add entries to a log. Switch to it with the 'Food \
     dictionary' button at the top of the window.",
    "Once the food dictionary has entries, click 'Add entries' to choose which foods to add to \
     the log and how much of each. The totals update as you type, so you can plan a meal \
     without saving it.",
    "The table below the log shows the total nutrition and cost of all entries, and of the \
     selected entries only.",
    "To change logged amounts, select the entries and click 'Edit selected entries'.",
    "Remove entries by selecting them and clicking 'Remove selected entries', or delete the \
     whole log with 'Delete log'.",
];

/// Stateful egui application for browsing logs and maintaining the food dictionary.
pub struct HealthHelperApp {
    model: AppModel,
    inbox: Vec<Msg>,
    store: Store,
}

impl HealthHelperApp {
    /// Build the app and load the dictionary and the log for `date`.
    pub fn new(store: Store, date: NaiveDate) -> Self {
        let (model, cmds) = mvu::init(date);
        let inbox = cmds
            .into_iter()
            .map(|cmd| mvu::run_command(&store, cmd))
            .collect();
        Self {
            model,
            inbox,
            store,
        }
    }
}

impl eframe::App for HealthHelperApp {
    /// Drains the inbox through the MVU kernel, then renders panels and any open dialog.
    /// Messages produced while rendering are handled on the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        if !self.inbox.is_empty() {
            let msgs = std::mem::take(&mut self.inbox);
            mvu::dispatch(&mut self.model, &self.store, msgs);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Health Helper");
                ui.separator();
                self.render_screen_switch(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    if ui.button(format!("{} Help", icons::QUESTION)).clicked() {
                        self.inbox.push(Msg::ShowHelp(true));
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        let modal_open = self.model.food_form.is_some()
            || self.model.entry_editor.is_some()
            || self.model.confirm.is_some()
            || self.model.show_help
            || self.model.error.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add_enabled_ui(!modal_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.model.screen {
                    Screen::Log => self.render_log_screen(ui),
                    Screen::FoodDictionary => self.render_food_screen(ui),
                });
            });
        });

        self.render_dialogs(ctx);

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl HealthHelperApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    fn render_screen_switch(&mut self, ui: &mut egui::Ui) {
        for (screen, label) in [
            (Screen::Log, format!("{} Log", icons::NOTEBOOK)),
            (
                Screen::FoodDictionary,
                format!("{} Food dictionary", icons::BOWL_FOOD),
            ),
        ] {
            let selected = self.model.screen == screen;
            let button = egui::Button::new(label).selected(selected);
            if ui.add(button).clicked() {
                self.inbox.push(Msg::ShowScreen(screen));
            }
        }
    }

    /// Date selector, the day's entries with totals, and the log actions.
    fn render_log_screen(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let date_msgs = log_date::view(&self.model.log_date, ui);
            self.inbox.extend(date_msgs.into_iter().map(Msg::LogDate));

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Change log").clicked() {
                    self.inbox.push(Msg::ChangeLog);
                }
                if ui
                    .button(format!("{} Previous log", icons::CARET_LEFT))
                    .clicked()
                {
                    self.inbox.push(Msg::Navigate(Direction::Previous));
                }
                if ui
                    .button(format!("Next log {}", icons::CARET_RIGHT))
                    .clicked()
                {
                    self.inbox.push(Msg::Navigate(Direction::Next));
                }
            });
        });

        ui.add_space(12.0);
        ui.heading(long_date(&self.model.log.date()));
        ui.add_space(4.0);

        let table_msgs = log_table::view(ui, &self.model.log);
        self.inbox.extend(table_msgs.into_iter().map(Msg::LogTable));

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("Select all").clicked() {
                self.inbox
                    .push(Msg::LogTable(log_table::LogTableMsg::SelectAll));
            }
            if ui.button("Unselect all").clicked() {
                self.inbox
                    .push(Msg::LogTable(log_table::LogTableMsg::UnselectAll));
            }
            ui.separator();
            if ui.button(format!("{} Delete log", icons::TRASH)).clicked() {
                self.inbox.push(Msg::DeleteLogRequested);
            }
            if ui
                .button(format!("{} Remove selected entries", icons::MINUS_CIRCLE))
                .clicked()
            {
                self.inbox.push(Msg::RemoveEntriesRequested);
            }
            if ui
                .button(format!("{} Edit selected entries", icons::PENCIL_SIMPLE))
                .clicked()
            {
                self.inbox.push(Msg::EditEntriesRequested);
            }
            if ui.button(format!("{} Add entries", icons::PLUS)).clicked() {
                self.inbox.push(Msg::AddEntriesRequested);
            }
        });
    }

    fn render_food_screen(&mut self, ui: &mut egui::Ui) {
        ui.heading("Food dictionary");
        ui.add_space(4.0);

        let table_msgs = food_table::view(ui, &self.model.foods);
        self.inbox.extend(table_msgs.into_iter().map(Msg::FoodTable));

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("Select all").clicked() {
                self.inbox
                    .push(Msg::FoodTable(food_table::FoodTableMsg::SelectAll));
            }
            if ui.button("Unselect all").clicked() {
                self.inbox
                    .push(Msg::FoodTable(food_table::FoodTableMsg::UnselectAll));
            }
            ui.separator();
            if ui
                .button(format!("{} Delete all entries", icons::TRASH))
                .clicked()
            {
                self.inbox.push(Msg::ClearDictionaryRequested);
            }
            if ui
                .button(format!("{} Delete selected entries", icons::MINUS_CIRCLE))
                .clicked()
            {
                self.inbox.push(Msg::DeleteFoodsRequested);
            }
            if ui
                .button(format!("{} Edit selected entry", icons::PENCIL_SIMPLE))
                .clicked()
            {
                self.inbox.push(Msg::EditFoodRequested);
            }
            if ui.button(format!("{} Add an entry", icons::PLUS)).clicked() {
                self.inbox.push(Msg::AddFoodRequested);
            }
        });
    }

    /// Forms first, then confirmation and help, with the error modal on top.
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let enabled = self.model.error.is_none();
        if let Some(form) = &self.model.food_form {
            let msgs = food_form::view(ctx, form, enabled);
            self.inbox.extend(msgs.into_iter().map(Msg::FoodForm));
        }
        if let Some(editor) = &self.model.entry_editor {
            let msgs = entry_editor::view(ctx, editor, enabled);
            self.inbox.extend(msgs.into_iter().map(Msg::EntryEditor));
        }
        self.render_confirm_modal(ctx);
        self.render_help_modal(ctx);
        self.render_error_modal(ctx);
    }

    fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(confirm) = &self.model.confirm else {
            return;
        };
        egui::Window::new(confirm.title())
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(confirm.message());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Nevermind").clicked() {
                        self.inbox.push(Msg::ConfirmDismissed);
                    }
                    if ui.button(format!("{} Yes", icons::WARNING)).clicked() {
                        self.inbox.push(Msg::ConfirmAccepted);
                    }
                });
            });
    }

    fn render_help_modal(&mut self, ctx: &egui::Context) {
        if !self.model.show_help {
            return;
        }
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .default_width(560.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                for paragraph in HELP_TEXT {
                    ui.label(format!("• {paragraph}"));
                    ui.add_space(4.0);
                }
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.inbox.push(Msg::ShowHelp(false));
                }
            });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}
