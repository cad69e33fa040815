// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Log date selector: month drop-down, day and year fields, and a calendar button.

use chrono::{Datelike, Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::error::ValidationError;
use crate::logic::dates::{MONTH_NAMES, parse_log_date};

/// Text the user is editing. Only becomes a date on [`LogDateModel::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogDateModel {
    /// 1-based month.
    pub month: u32,
    pub day: String,
    pub year: String,
}

impl LogDateModel {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day().to_string(),
            year: format!("{:04}", date.year()),
        }
    }

    pub fn parse(&self) -> Result<NaiveDate, ValidationError> {
        parse_log_date(self.month, &self.day, &self.year)
    }
}

impl Default for LogDateModel {
    fn default() -> Self {
        Self::from_date(Local::now().date_naive())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogDateMsg {
    SetMonth(u32),
    SetDay(String),
    SetYear(String),
    /// Picked from the calendar.
    SetDate(NaiveDate),
    SetToday,
    /// Enter pressed in a text field.
    Submit,
}

pub fn update(model: &mut LogDateModel, msg: LogDateMsg) {
    match msg {
        LogDateMsg::SetMonth(m) => model.month = m.clamp(1, 12),
        LogDateMsg::SetDay(text) => model.day = digits_only(&text, 2),
        LogDateMsg::SetYear(text) => model.year = digits_only(&text, 4),
        LogDateMsg::SetDate(date) => *model = LogDateModel::from_date(date),
        LogDateMsg::SetToday => *model = LogDateModel::default(),
        LogDateMsg::Submit => {}
    }
}

/// Day and year fields take digits only.
fn digits_only(text: &str, max_len: usize) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

pub fn view(model: &LogDateModel, ui: &mut egui::Ui) -> Vec<LogDateMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.label("Log date:");

        let mut month = model.month;
        egui::ComboBox::from_id_salt("log_date_month")
            .width(110.0)
            .selected_text(MONTH_NAMES[(model.month as usize).saturating_sub(1) % 12])
            .show_ui(ui, |ui| {
                for (i, name) in MONTH_NAMES.iter().enumerate() {
                    ui.selectable_value(&mut month, i as u32 + 1, *name);
                }
            });
        if month != model.month {
            msgs.push(LogDateMsg::SetMonth(month));
        }

        let mut day = model.day.clone();
        let day_resp = ui.add(
            egui::TextEdit::singleline(&mut day)
                .hint_text("Day")
                .desired_width(32.0),
        );
        if day_resp.changed() {
            msgs.push(LogDateMsg::SetDay(day));
        }

        let mut year = model.year.clone();
        let year_resp = ui.add(
            egui::TextEdit::singleline(&mut year)
                .hint_text("Year")
                .desired_width(48.0),
        );
        if year_resp.changed() {
            msgs.push(LogDateMsg::SetYear(year));
        }

        let enter = (day_resp.lost_focus() || year_resp.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter {
            msgs.push(LogDateMsg::Submit);
        }

        let mut picked = model.parse().unwrap_or_else(|_| Local::now().date_naive());
        if ui
            .add(
                DatePickerButton::new(&mut picked)
                    .id_salt("log_date_calendar")
                    .show_icon(true),
            )
            .changed()
        {
            msgs.push(LogDateMsg::SetDate(picked));
        }

        if ui
            .button(format!("{} Today", egui_phosphor::regular::CALENDAR_CHECK))
            .on_hover_text("Jump to today's log")
            .clicked()
        {
            msgs.push(LogDateMsg::SetToday);
        }
    });

    msgs
}
