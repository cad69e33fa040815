// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Root Model-View-Update kernel wiring component state, messages, and store commands.
//!
//! Views emit [`Msg`]s, [`update`] mutates the [`AppModel`] and queues [`Command`]s, and
//! [`run_command`] executes each command against the [`Store`] and answers with another
//! message. Everything runs on the UI thread; see [`dispatch`].

use std::collections::VecDeque;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{Result, StoreError, ValidationError};
use crate::logic::dates::long_date;
use crate::models::{FoodItem, LogEntry};
use crate::store::{DeletePolicy, Store};
use crate::ui::components::entry_editor::{self, EntryEditorEvent, EntryEditorModel, EntryEditorMsg};
use crate::ui::components::food_form::{self, FoodFormEvent, FoodFormModel, FoodFormMsg};
use crate::ui::components::food_table::{self, FoodTableModel, FoodTableMsg};
use crate::ui::components::log_date::{self, LogDateModel, LogDateMsg};
use crate::ui::components::log_table::{self, LogTableModel, LogTableMsg};

const NO_FOODS: &str = "There are currently no entries in the food dictionary. Open the food \
                        dictionary to add entries, which are used to build logs.";

/// Which main screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Log,
    FoodDictionary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Destructive action waiting for a yes/no answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Confirm {
    DeleteLog(NaiveDate),
    /// `in_use` carries the reason a plain delete was refused; accepting then cascades.
    DeleteFoods {
        names: Vec<String>,
        in_use: Option<String>,
    },
    ClearDictionary {
        in_use: Option<String>,
    },
}

impl Confirm {
    pub fn title(&self) -> &'static str {
        match self {
            Confirm::DeleteLog(_) => "Delete log",
            Confirm::DeleteFoods { .. } => "Delete food dictionary entries",
            Confirm::ClearDictionary { .. } => "Delete food dictionary",
        }
    }

    pub fn message(&self) -> String {
        let cascade = |reason: &str| {
            format!("{reason} Deleting will also remove those log entries. Continue?")
        };
        match self {
            Confirm::DeleteLog(date) => format!(
                "Are you sure you want to delete the log for {}? This can't be undone.",
                long_date(date)
            ),
            Confirm::DeleteFoods {
                in_use: Some(reason),
                ..
            }
            | Confirm::ClearDictionary {
                in_use: Some(reason),
            } => cascade(reason.as_str()),
            Confirm::DeleteFoods {
                names,
                in_use: None,
            } => format!(
                "Are you sure you want to delete {} from the food dictionary? This can't be \
                 undone.",
                names
                    .iter()
                    .map(|n| format!("'{n}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Confirm::ClearDictionary { in_use: None } => {
                "Are you sure you want to delete every entry in the food dictionary? This can't \
                 be undone."
                    .to_string()
            }
        }
    }

    fn into_command(self) -> Command {
        let policy = |in_use: &Option<String>| {
            if in_use.is_some() {
                DeletePolicy::Cascade
            } else {
                DeletePolicy::Restrict
            }
        };
        match self {
            Confirm::DeleteLog(date) => Command::DeleteLog(date),
            Confirm::DeleteFoods { names, in_use } => Command::DeleteFoods {
                policy: policy(&in_use),
                names,
            },
            Confirm::ClearDictionary { in_use } => Command::ClearDictionary(policy(&in_use)),
        }
    }
}

/// Top-level application state.
pub struct AppModel {
    pub screen: Screen,
    /// Date fields above the log table.
    pub log_date: LogDateModel,
    /// The log being shown.
    pub log: LogTableModel,
    /// Mirror of the food dictionary.
    pub foods: FoodTableModel,
    pub food_form: Option<FoodFormModel>,
    pub entry_editor: Option<EntryEditorModel>,
    pub confirm: Option<Confirm>,
    pub show_help: bool,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            screen: Screen::default(),
            log_date: LogDateModel::from_date(date),
            log: LogTableModel::new(date),
            foods: FoodTableModel::default(),
            food_form: None,
            entry_editor: None,
            confirm: None,
            show_help: false,
            status: None,
            error: None,
        }
    }
}

/// Model plus the commands that populate it from disk.
pub fn init(date: NaiveDate) -> (AppModel, Vec<Command>) {
    (
        AppModel::new(date),
        vec![Command::LoadFoods, Command::LoadLog(date)],
    )
}

/// Application messages routed through the update function.
pub enum Msg {
    ShowScreen(Screen),
    ShowHelp(bool),
    DismissError,

    LogDate(LogDateMsg),
    ChangeLog,
    Navigate(Direction),
    LogTable(LogTableMsg),
    AddEntriesRequested,
    EditEntriesRequested,
    RemoveEntriesRequested,
    DeleteLogRequested,
    EntryEditor(EntryEditorMsg),

    FoodTable(FoodTableMsg),
    AddFoodRequested,
    EditFoodRequested,
    DeleteFoodsRequested,
    ClearDictionaryRequested,
    FoodForm(FoodFormMsg),

    ConfirmAccepted,
    ConfirmDismissed,

    LogLoaded {
        date: NaiveDate,
        result: Result<Vec<LogEntry>>,
    },
    FoodsLoaded(Result<Vec<FoodItem>>),
    /// Fresh copy of one food, read before opening the edit form.
    FoodLoaded {
        name: String,
        result: Result<Option<FoodItem>>,
    },
    LogFound {
        direction: Direction,
        result: Result<Option<NaiveDate>>,
    },
    FoodSaved {
        name: String,
        result: Result<()>,
    },
    FoodsDeleted {
        names: Vec<String>,
        result: Result<usize>,
    },
    DictionaryCleared(Result<usize>),
    /// A log was written; `Ok` carries the status line.
    LogChanged {
        date: NaiveDate,
        result: Result<String>,
    },
}

/// Store operations executed between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadLog(NaiveDate),
    LoadFoods,
    LoadFood(String),
    FindLog {
        from: NaiveDate,
        direction: Direction,
    },
    SaveFood {
        original: Option<String>,
        item: FoodItem,
    },
    DeleteFoods {
        names: Vec<String>,
        policy: DeletePolicy,
    },
    ClearDictionary(DeletePolicy),
    AddLogEntries {
        date: NaiveDate,
        entries: Vec<LogEntry>,
    },
    UpdateLogEntries {
        date: NaiveDate,
        entries: Vec<LogEntry>,
    },
    RemoveLogEntries {
        date: NaiveDate,
        names: Vec<String>,
    },
    DeleteLog(NaiveDate),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::ShowScreen(screen) => model.screen = screen,
        Msg::ShowHelp(show) => model.show_help = show,
        Msg::DismissError => model.error = None,

        Msg::LogDate(m) => {
            let jump = matches!(
                m,
                LogDateMsg::SetDate(_) | LogDateMsg::SetToday | LogDateMsg::Submit
            );
            log_date::update(&mut model.log_date, m);
            if jump {
                change_log(model, cmds);
            }
        }
        Msg::ChangeLog => change_log(model, cmds),
        Msg::Navigate(direction) => cmds.push(Command::FindLog {
            from: model.log.date(),
            direction,
        }),
        Msg::LogTable(m) => log_table::update(&mut model.log, m),
        Msg::AddEntriesRequested => {
            if model.foods.foods().is_empty() {
                surface_event(model, NO_FOODS.to_string(), true);
            } else {
                model.entry_editor = Some(EntryEditorModel::for_adding(model.foods.foods()));
            }
        }
        Msg::EditEntriesRequested => open_entry_editor_for_selection(model),
        Msg::RemoveEntriesRequested => request_entry_removal(model, cmds),
        Msg::DeleteLogRequested => {
            if model.log.entries().is_empty() {
                surface_event(model, log_not_found(model.log.date()), true);
            } else {
                model.confirm = Some(Confirm::DeleteLog(model.log.date()));
            }
        }
        Msg::EntryEditor(m) => {
            // The error modal sits on top of the editor until dismissed.
            if model.error.is_some() {
                return;
            }
            let Some(editor) = model.entry_editor.as_mut() else {
                return;
            };
            match entry_editor::update(editor, m) {
                Some(EntryEditorEvent::Add(entries)) => cmds.push(Command::AddLogEntries {
                    date: model.log.date(),
                    entries,
                }),
                Some(EntryEditorEvent::Update(entries)) => cmds.push(Command::UpdateLogEntries {
                    date: model.log.date(),
                    entries,
                }),
                Some(EntryEditorEvent::Invalid(message)) => surface_event(model, message, true),
                Some(EntryEditorEvent::Cancelled) => model.entry_editor = None,
                None => {}
            }
        }

        Msg::FoodTable(m) => food_table::update(&mut model.foods, m),
        Msg::AddFoodRequested => model.food_form = Some(FoodFormModel::for_adding()),
        Msg::EditFoodRequested => {
            let selected = model.foods.selected_names();
            match selected.as_slice() {
                [name] => cmds.push(Command::LoadFood(name.clone())),
                _ => surface_event(model, "Please select a single entry to edit.".into(), true),
            }
        }
        Msg::DeleteFoodsRequested => {
            let names = model.foods.selected_names();
            if names.is_empty() {
                surface_event(model, ValidationError::NothingSelected.to_string(), true);
            } else {
                model.confirm = Some(Confirm::DeleteFoods {
                    names,
                    in_use: None,
                });
            }
        }
        Msg::ClearDictionaryRequested => {
            if model.foods.foods().is_empty() {
                surface_event(
                    model,
                    "There are currently no entries in the food dictionary.".into(),
                    true,
                );
            } else {
                model.confirm = Some(Confirm::ClearDictionary { in_use: None });
            }
        }
        Msg::FoodForm(m) => {
            if model.error.is_some() {
                return;
            }
            let Some(form) = model.food_form.as_mut() else {
                return;
            };
            match food_form::update(form, m) {
                Some(FoodFormEvent::Save { original, item }) => {
                    cmds.push(Command::SaveFood { original, item })
                }
                Some(FoodFormEvent::Invalid(message)) => surface_event(model, message, true),
                Some(FoodFormEvent::Cancelled) => model.food_form = None,
                None => {}
            }
        }

        Msg::ConfirmAccepted => {
            if let Some(confirm) = model.confirm.take() {
                cmds.push(confirm.into_command());
            }
        }
        Msg::ConfirmDismissed => model.confirm = None,

        Msg::LogLoaded { date, result } => match result {
            Ok(entries) => {
                let status = match entries.len() {
                    0 => format!("No log for {}.", long_date(&date)),
                    n => format!(
                        "Showing the log for {} ({}).",
                        long_date(&date),
                        entries_label(n)
                    ),
                };
                model.log.set_log(date, entries);
                model.log_date = LogDateModel::from_date(date);
                surface_event(model, status, false);
            }
            Err(err) => report_store_error(model, err),
        },
        Msg::FoodsLoaded(result) => match result {
            Ok(foods) => model.foods.set_foods(foods),
            Err(err) => report_store_error(model, err),
        },
        Msg::FoodLoaded { name, result } => match result {
            Ok(Some(food)) => model.food_form = Some(FoodFormModel::for_editing(&food)),
            Ok(None) => report_store_error(model, StoreError::FoodNotFound(name)),
            Err(err) => report_store_error(model, err),
        },
        Msg::LogFound { direction, result } => match result {
            Ok(Some(date)) => {
                model.log_date = LogDateModel::from_date(date);
                cmds.push(Command::LoadLog(date));
            }
            Ok(None) => {
                let which = match direction {
                    Direction::Previous => "before",
                    Direction::Next => "after",
                };
                surface_event(
                    model,
                    format!("There are no logs {which} the currently selected date."),
                    true,
                );
            }
            Err(err) => report_store_error(model, err),
        },
        Msg::FoodSaved { name, result } => match result {
            Ok(()) => {
                model.food_form = None;
                surface_event(
                    model,
                    format!("Saved '{name}' to the food dictionary."),
                    false,
                );
                refresh(model, cmds);
            }
            Err(err) => report_store_error(model, err),
        },
        Msg::FoodsDeleted { names, result } => match result {
            Ok(removed) => {
                surface_event(
                    model,
                    format!(
                        "Removed {} from the food dictionary.",
                        entries_label(removed)
                    ),
                    false,
                );
                refresh(model, cmds);
            }
            Err(err @ StoreError::FoodInUse { .. }) => {
                model.confirm = Some(Confirm::DeleteFoods {
                    names,
                    in_use: Some(err.to_string()),
                });
            }
            Err(err) => report_store_error(model, err),
        },
        Msg::DictionaryCleared(result) => match result {
            Ok(removed) => {
                surface_event(
                    model,
                    format!("Deleted the food dictionary ({}).", entries_label(removed)),
                    false,
                );
                refresh(model, cmds);
            }
            Err(err @ StoreError::FoodInUse { .. }) => {
                model.confirm = Some(Confirm::ClearDictionary {
                    in_use: Some(err.to_string()),
                });
            }
            Err(err) => report_store_error(model, err),
        },
        Msg::LogChanged { date, result } => match result {
            Ok(status) => {
                model.entry_editor = None;
                surface_event(model, status, false);
                cmds.push(Command::LoadLog(date));
            }
            Err(err) => report_store_error(model, err),
        },
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(store: &Store, cmd: Command) -> Msg {
    debug!(?cmd, "running command");
    match cmd {
        Command::LoadLog(date) => Msg::LogLoaded {
            date,
            result: store.log(date),
        },
        Command::LoadFoods => Msg::FoodsLoaded(store.foods()),
        Command::LoadFood(name) => {
            let result = store.food(&name);
            Msg::FoodLoaded { name, result }
        }
        Command::FindLog { from, direction } => Msg::LogFound {
            direction,
            result: match direction {
                Direction::Previous => store.previous_log_date(from),
                Direction::Next => store.next_log_date(from),
            },
        },
        Command::SaveFood { original, item } => {
            let name = item.name.clone();
            let result = match original {
                Some(original) => store.update_food(&original, item),
                None => store.add_food(item),
            };
            Msg::FoodSaved { name, result }
        }
        Command::DeleteFoods { names, policy } => {
            let result = store.delete_foods(&names, policy);
            Msg::FoodsDeleted { names, result }
        }
        Command::ClearDictionary(policy) => {
            Msg::DictionaryCleared(store.clear_food_dictionary(policy))
        }
        Command::AddLogEntries { date, entries } => {
            let count = entries.len();
            Msg::LogChanged {
                date,
                result: store.add_log_entries(date, entries).map(|()| {
                    format!(
                        "Added {} to the log for {}.",
                        entries_label(count),
                        long_date(&date)
                    )
                }),
            }
        }
        Command::UpdateLogEntries { date, entries } => {
            let count = entries.len();
            Msg::LogChanged {
                date,
                result: store.update_log_entries(date, entries).map(|()| {
                    format!(
                        "Updated {} in the log for {}.",
                        entries_label(count),
                        long_date(&date)
                    )
                }),
            }
        }
        Command::RemoveLogEntries { date, names } => Msg::LogChanged {
            date,
            result: store.remove_log_entries(date, &names).map(|removed| {
                format!(
                    "Removed {} from the log for {}.",
                    entries_label(removed),
                    long_date(&date)
                )
            }),
        },
        Command::DeleteLog(date) => Msg::LogChanged {
            date,
            result: store
                .delete_log(date)
                .map(|()| format!("Deleted the log for {}.", long_date(&date))),
        },
    }
}

/// Feed messages through [`update`], running every resulting command until the queue drains.
pub fn dispatch(model: &mut AppModel, store: &Store, msgs: impl IntoIterator<Item = Msg>) {
    let mut queue: VecDeque<Msg> = msgs.into_iter().collect();
    while let Some(msg) = queue.pop_front() {
        let mut cmds = Vec::new();
        update(model, msg, &mut cmds);
        queue.extend(cmds.into_iter().map(|cmd| run_command(store, cmd)));
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

fn report_store_error(model: &mut AppModel, err: StoreError) {
    if !err.is_user_error() {
        warn!(error = %err, "store operation failed");
    }
    surface_event(model, err.to_string(), true);
}

fn change_log(model: &mut AppModel, cmds: &mut Vec<Command>) {
    match model.log_date.parse() {
        Ok(date) => cmds.push(Command::LoadLog(date)),
        Err(err) => surface_event(model, err.to_string(), true),
    }
}

/// Reload everything derived from the food dictionary.
fn refresh(model: &AppModel, cmds: &mut Vec<Command>) {
    cmds.push(Command::LoadFoods);
    cmds.push(Command::LoadLog(model.log.date()));
}

fn open_entry_editor_for_selection(model: &mut AppModel) {
    let names = model.log.selected_names();
    if names.is_empty() {
        surface_event(
            model,
            "Please select at least one log entry to edit.".into(),
            true,
        );
        return;
    }
    if model.foods.foods().is_empty() {
        surface_event(model, NO_FOODS.to_string(), true);
        return;
    }

    let mut pairs = Vec::with_capacity(names.len());
    for name in &names {
        let Some(food) = model.foods.food(name) else {
            let message = format!(
                "The entry for '{name}' has been removed from the food dictionary since it was \
                 logged. It still counts toward the totals, but it can't be edited without a \
                 matching food dictionary entry."
            );
            surface_event(model, message, true);
            return;
        };
        if let Some(entry) = model.log.entries().iter().find(|e| &e.food_name == name) {
            pairs.push((food.clone(), entry.clone()));
        }
    }
    model.entry_editor = Some(EntryEditorModel::for_editing(pairs));
}

fn request_entry_removal(model: &mut AppModel, cmds: &mut Vec<Command>) {
    if model.log.entries().is_empty() {
        surface_event(model, log_not_found(model.log.date()), true);
        return;
    }
    let names = model.log.selected_names();
    if names.is_empty() {
        surface_event(
            model,
            "Please select at least one entry to remove.".into(),
            true,
        );
    } else if model.log.all_selected() {
        model.confirm = Some(Confirm::DeleteLog(model.log.date()));
    } else {
        cmds.push(Command::RemoveLogEntries {
            date: model.log.date(),
            names,
        });
    }
}

fn log_not_found(date: NaiveDate) -> String {
    StoreError::LogNotFound(date).to_string()
}

fn entries_label(n: usize) -> String {
    if n == 1 {
        "1 entry".to_string()
    } else {
        format!("{n} entries")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Amount, Cost, Nutrient, Nutrients, Unit};
    use crate::ui::components::food_form::FoodFormMsg;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn oats() -> FoodItem {
        FoodItem {
            name: "oats".into(),
            serving_sizes: BTreeMap::from([(Unit::G, 40.0)]),
            nutrients: Nutrients::new().with(Nutrient::Calories, 150.0),
            cost: Some(Cost::new(4.0, 10.0)),
        }
    }

    /// Store seeded with `oats`, plus a started app showing `day`.
    fn setup(day: NaiveDate) -> (TempDir, Store, AppModel) {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        store.add_food(oats()).unwrap();
        let (mut model, cmds) = init(day);
        let msgs: Vec<Msg> = cmds.into_iter().map(|c| run_command(&store, c)).collect();
        dispatch(&mut model, &store, msgs);
        (tmp, store, model)
    }

    fn log_oats(store: &Store, day: NaiveDate) {
        let entry =
            crate::logic::entries::calculate_entry(&oats(), Amount::servings(1.0)).unwrap();
        store.add_log_entries(day, vec![entry]).unwrap();
    }

    #[test]
    fn startup_loads_dictionary_and_log() {
        let day = date(2020, 4, 12);
        let (_tmp, _store, model) = setup(day);

        assert_eq!(model.foods.foods().len(), 1);
        assert_eq!(model.log.date(), day);
        assert!(model.log.entries().is_empty());
        assert_eq!(model.status.as_deref(), Some("No log for April 12, 2020."));
        assert!(model.error.is_none());
    }

    #[test]
    fn food_form_submit_saves_and_closes() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));

        dispatch(
            &mut model,
            &store,
            [
                Msg::AddFoodRequested,
                Msg::FoodForm(FoodFormMsg::NameChanged("rice".into())),
                Msg::FoodForm(FoodFormMsg::ServingAmountChanged {
                    slot: 0,
                    text: "1".into(),
                }),
                Msg::FoodForm(FoodFormMsg::Submit),
            ],
        );

        assert!(model.food_form.is_none());
        assert!(model.error.is_none());
        assert!(store.food("rice").unwrap().is_some());
        assert_eq!(model.foods.foods().len(), 2);
    }

    #[test]
    fn duplicate_food_keeps_form_open() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));

        dispatch(
            &mut model,
            &store,
            [
                Msg::AddFoodRequested,
                Msg::FoodForm(FoodFormMsg::NameChanged("oats".into())),
                Msg::FoodForm(FoodFormMsg::ServingAmountChanged {
                    slot: 0,
                    text: "1".into(),
                }),
                Msg::FoodForm(FoodFormMsg::Submit),
            ],
        );

        assert!(model.food_form.is_some());
        assert!(model.error.as_deref().unwrap().contains("matches an existing one"));
    }

    #[test]
    fn invalid_date_sets_error_without_commands() {
        let mut model = AppModel::new(date(2020, 4, 12));
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::LogDate(LogDateMsg::SetDay("31".into())),
            &mut cmds,
        );
        update(&mut model, Msg::LogDate(LogDateMsg::SetMonth(2)), &mut cmds);
        update(&mut model, Msg::ChangeLog, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error,
            Some(ValidationError::NonexistentDate.to_string())
        );
    }

    #[test]
    fn picking_a_date_loads_that_log() {
        let day = date(2020, 4, 12);
        let (_tmp, store, mut model) = setup(date(2020, 1, 1));
        log_oats(&store, day);

        dispatch(&mut model, &store, [Msg::LogDate(LogDateMsg::SetDate(day))]);

        assert_eq!(model.log.date(), day);
        assert_eq!(model.log.entries().len(), 1);
    }

    #[test]
    fn adding_entries_through_editor_writes_log() {
        let day = date(2020, 4, 12);
        let (_tmp, store, mut model) = setup(day);

        dispatch(
            &mut model,
            &store,
            [
                Msg::AddEntriesRequested,
                Msg::EntryEditor(EntryEditorMsg::AmountChanged {
                    row: 0,
                    text: "80".into(),
                }),
                Msg::EntryEditor(EntryEditorMsg::UnitChanged {
                    row: 0,
                    unit: crate::models::AmountUnit::Measure(Unit::G),
                }),
                Msg::EntryEditor(EntryEditorMsg::Submit),
            ],
        );

        assert!(model.entry_editor.is_none());
        assert_eq!(model.log.entries().len(), 1);
        assert_eq!(model.log.totals().nutrient(Nutrient::Calories), 300.0);
        assert_eq!(store.log(day).unwrap()[0].servings, 2.0);
    }

    #[test]
    fn adding_with_empty_dictionary_is_refused() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        let mut model = AppModel::new(date(2020, 4, 12));

        dispatch(&mut model, &store, [Msg::AddEntriesRequested]);

        assert!(model.entry_editor.is_none());
        assert_eq!(model.error.as_deref(), Some(NO_FOODS));
    }

    #[test]
    fn deleting_referenced_food_asks_to_cascade() {
        let day = date(2020, 4, 12);
        let (_tmp, store, mut model) = setup(day);
        log_oats(&store, day);

        dispatch(
            &mut model,
            &store,
            [
                Msg::FoodTable(FoodTableMsg::Toggle("oats".into())),
                Msg::DeleteFoodsRequested,
                Msg::ConfirmAccepted,
            ],
        );

        match &model.confirm {
            Some(Confirm::DeleteFoods {
                in_use: Some(reason),
                ..
            }) => assert!(reason.contains("2020-04-12")),
            other => panic!("expected cascade confirmation, got {other:?}"),
        }
        assert!(store.food("oats").unwrap().is_some());

        dispatch(&mut model, &store, [Msg::ConfirmAccepted]);

        assert!(store.food("oats").unwrap().is_none());
        assert!(!store.log_exists(day));
        assert!(model.foods.foods().is_empty());
        assert!(model.log.entries().is_empty());
    }

    #[test]
    fn removing_every_entry_asks_to_delete_log() {
        let day = date(2020, 4, 12);
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        store.add_food(oats()).unwrap();
        log_oats(&store, day);
        let (mut model, cmds) = init(day);
        let msgs: Vec<Msg> = cmds.into_iter().map(|c| run_command(&store, c)).collect();
        dispatch(&mut model, &store, msgs);

        dispatch(
            &mut model,
            &store,
            [
                Msg::LogTable(LogTableMsg::SelectAll),
                Msg::RemoveEntriesRequested,
            ],
        );
        assert_eq!(model.confirm, Some(Confirm::DeleteLog(day)));

        dispatch(&mut model, &store, [Msg::ConfirmAccepted]);

        assert!(!store.log_exists(day));
        assert!(model.log.entries().is_empty());
        assert_eq!(model.status.as_deref(), Some("No log for April 12, 2020."));
    }

    #[test]
    fn navigation_reports_missing_neighbours() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));
        log_oats(&store, date(2020, 4, 20));

        dispatch(&mut model, &store, [Msg::Navigate(Direction::Previous)]);
        assert_eq!(
            model.error.as_deref(),
            Some("There are no logs before the currently selected date.")
        );

        dispatch(
            &mut model,
            &store,
            [Msg::DismissError, Msg::Navigate(Direction::Next)],
        );
        assert!(model.error.is_none());
        assert_eq!(model.log.date(), date(2020, 4, 20));
        assert_eq!(model.log_date.day, "20");
    }

    #[test]
    fn editing_entry_of_removed_food_is_refused() {
        let day = date(2020, 4, 12);
        let (_tmp, store, mut model) = setup(day);
        log_oats(&store, day);
        dispatch(&mut model, &store, [Msg::ChangeLog]);
        model.foods.set_foods(vec![FoodItem::new(
            "rice",
            BTreeMap::from([(Unit::Cup, 1.0)]),
        )]);

        dispatch(
            &mut model,
            &store,
            [
                Msg::LogTable(LogTableMsg::Toggle("oats".into())),
                Msg::EditEntriesRequested,
            ],
        );

        assert!(model.entry_editor.is_none());
        assert!(model.error.as_deref().unwrap().contains("'oats'"));
    }

    #[test]
    fn edit_food_requires_single_selection() {
        let mut model = AppModel::new(date(2020, 4, 12));
        let mut cmds = Vec::new();

        update(&mut model, Msg::EditFoodRequested, &mut cmds);

        assert!(model.food_form.is_none());
        assert_eq!(
            model.error.as_deref(),
            Some("Please select a single entry to edit.")
        );
    }

    #[test]
    fn edit_food_form_is_filled_from_store() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));
        let mut changed = oats();
        changed.serving_sizes = BTreeMap::from([(Unit::G, 45.0)]);
        store.update_food("oats", changed).unwrap();

        dispatch(
            &mut model,
            &store,
            [
                Msg::FoodTable(FoodTableMsg::Toggle("oats".into())),
                Msg::EditFoodRequested,
            ],
        );

        let form = model.food_form.as_ref().unwrap();
        assert_eq!(form.original(), Some("oats"));
        assert_eq!(form.draft().serving_sizes[0], ("45".to_string(), Unit::G));
    }

    #[test]
    fn editing_food_deleted_elsewhere_reports_not_found() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));
        store
            .delete_foods(&["oats".to_string()], DeletePolicy::Restrict)
            .unwrap();

        dispatch(
            &mut model,
            &store,
            [
                Msg::FoodTable(FoodTableMsg::Toggle("oats".into())),
                Msg::EditFoodRequested,
            ],
        );

        assert!(model.food_form.is_none());
        assert_eq!(
            model.error,
            Some(StoreError::FoodNotFound("oats".into()).to_string())
        );
    }

    #[test]
    fn dialogs_ignore_input_while_error_is_shown() {
        let (_tmp, store, mut model) = setup(date(2020, 4, 12));
        dispatch(
            &mut model,
            &store,
            [Msg::AddFoodRequested, Msg::FoodForm(FoodFormMsg::Submit)],
        );
        assert!(model.error.is_some());

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::FoodForm(FoodFormMsg::NameChanged("rice".into())),
            &mut cmds,
        );
        update(&mut model, Msg::FoodForm(FoodFormMsg::Submit), &mut cmds);
        assert!(cmds.is_empty());
        assert_eq!(model.food_form.as_ref().unwrap().draft().name, "");

        update(&mut model, Msg::DismissError, &mut cmds);
        update(
            &mut model,
            Msg::FoodForm(FoodFormMsg::NameChanged("rice".into())),
            &mut cmds,
        );
        assert_eq!(model.food_form.as_ref().unwrap().draft().name, "rice");
    }
}
