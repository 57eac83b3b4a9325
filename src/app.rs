use std::cmp::min;

use chrono::{Days, Local, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

use crate::model::TaskId;
use crate::store::TaskStore;

/// Which widget currently receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Description,
    DueDate,
    AddButton,
    List,
}

/// Whole application state: the task store plus the pending form fields and
/// the transient widget state. Owns no rendering resources, so it can be
/// driven entirely through [`App::handle_key`] in tests.
pub struct App {
    pub store: TaskStore,
    pub name_input: String,
    pub description_input: String,
    pub due_date: NaiveDate,
    pub focus: Focus,
    pub list_state: ListState,
    pub should_quit: bool,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new() -> Self {
        App {
            store: TaskStore::new(),
            name_input: "".to_string(),
            description_input: "".to_string(),
            due_date: today(),
            focus: Focus::Name,
            list_state: ListState::default(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Name | Focus::Description => match key.code {
                KeyCode::Char(c) => {
                    match self.focus {
                        Focus::Name => self.name_input.push(c),
                        _ => self.description_input.push(c),
                    };
                }
                KeyCode::Backspace => {
                    match self.focus {
                        Focus::Name => self.name_input.pop(),
                        _ => self.description_input.pop(),
                    };
                }
                KeyCode::Enter => self.focus_next(),
                KeyCode::Esc => self.set_focus(Focus::List),
                _ => {}
            },

            Focus::DueDate => match key.code {
                KeyCode::Left => self.shift_due_date_days(-1),
                KeyCode::Right => self.shift_due_date_days(1),
                KeyCode::Up => self.shift_due_date_days(-7),
                KeyCode::Down => self.shift_due_date_days(7),
                KeyCode::PageUp => self.shift_due_date_months(-1),
                KeyCode::PageDown => self.shift_due_date_months(1),
                KeyCode::Char('t') => self.due_date = today(),
                KeyCode::Enter => self.set_focus(Focus::AddButton),
                KeyCode::Esc => self.set_focus(Focus::List),
                _ => {}
            },

            Focus::AddButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit_task(),
                KeyCode::Esc => self.set_focus(Focus::List),
                _ => {}
            },

            Focus::List => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
                KeyCode::Char(' ') | KeyCode::Char('l') => self.toggle_selected(),
                KeyCode::Char('D') => self.delete_selected(),
                _ => {}
            },
        }
    }

    /// Creates a task from the pending fields, then resets the form: both
    /// text fields cleared, date back to today.
    pub fn submit_task(&mut self) {
        self.store.add(
            self.name_input.clone(),
            self.description_input.clone(),
            self.due_date,
        );
        self.name_input = "".to_string();
        self.description_input = "".to_string();
        self.due_date = today();
    }

    fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Name => Focus::Description,
            Focus::Description => Focus::DueDate,
            Focus::DueDate => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Name,
        };
        self.set_focus(next);
    }

    fn focus_previous(&mut self) {
        let previous = match self.focus {
            Focus::Name => Focus::List,
            Focus::Description => Focus::Name,
            Focus::DueDate => Focus::Description,
            Focus::AddButton => Focus::DueDate,
            Focus::List => Focus::AddButton,
        };
        self.set_focus(previous);
    }

    fn set_focus(&mut self, focus: Focus) {
        // The selection doubles as the affordance reveal, so it is dropped
        // as soon as the list loses focus.
        if self.focus == Focus::List && focus != Focus::List {
            self.list_state.select(None);
        }
        if focus == Focus::List && self.list_state.selected().is_none() && !self.store.is_empty() {
            self.list_state.select(Some(0));
        }
        self.focus = focus;
    }

    fn shift_due_date_days(&mut self, days: i64) {
        let shifted = if days >= 0 {
            self.due_date.checked_add_days(Days::new(days as u64))
        } else {
            self.due_date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.due_date = date;
        }
    }

    fn shift_due_date_months(&mut self, months: i32) {
        let shifted = if months >= 0 {
            self.due_date.checked_add_months(Months::new(months as u32))
        } else {
            self.due_date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.due_date = date;
        }
    }

    fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        match self.list_state.selected() {
            Some(v) => {
                self.list_state.select(Some(min(v + 1, self.store.len() - 1)));
            }
            None => {
                self.list_state.select(Some(0));
            }
        }
    }

    fn select_previous(&mut self) {
        if self.store.is_empty() {
            return;
        }
        match self.list_state.selected() {
            Some(v) => {
                let previous = match v {
                    0 => None,
                    v => Some(v - 1),
                };
                self.list_state.select(previous);
            }
            None => {
                self.list_state.select(Some(0));
            }
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.list_state
            .selected()
            .and_then(|index| self.store.tasks().get(index))
            .map(|task| task.id)
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_completion(id);
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.delete(id);
            match self.list_state.selected() {
                Some(_) if self.store.is_empty() => self.list_state.select(None),
                Some(v) if v >= self.store.len() => {
                    self.list_state.select(Some(self.store.len() - 1));
                }
                _ => {}
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
