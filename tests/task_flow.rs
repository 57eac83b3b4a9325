use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use task_tui::app::{App, Focus};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn due(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Fills the form through key events and submits it. The due date is set
/// directly because the picker moves relative to the current day.
fn add_task(app: &mut App, name: &str, description: &str, date: NaiveDate) {
    app.focus = Focus::Name;
    type_text(app, name);
    press(app, KeyCode::Tab);
    type_text(app, description);
    app.due_date = date;
    press(app, KeyCode::Tab);
    press(app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::AddButton);
    press(app, KeyCode::Enter);
}

fn enter_list(app: &mut App) {
    app.focus = Focus::AddButton;
    press(app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn adding_a_task_records_the_form_fields() {
    let mut app = App::new();
    add_task(&mut app, "Buy milk", "2% milk", due(2025, 1, 2));

    assert_eq!(app.store.len(), 1);
    let task = &app.store.tasks()[0];
    assert_eq!(task.name, "Buy milk");
    assert_eq!(task.description, "2% milk");
    assert_eq!(task.due_date, due(2025, 1, 2));
    assert!(!task.completed);
}

#[test]
fn toggling_the_first_task_leaves_the_second_untouched() {
    let mut app = App::new();
    add_task(&mut app, "A", "first", due(2025, 1, 2));
    add_task(&mut app, "B", "second", due(2025, 1, 3));

    enter_list(&mut app);
    press(&mut app, KeyCode::Char(' '));

    let names: Vec<_> = app.store.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(app.store.tasks()[0].completed);
    assert!(!app.store.tasks()[1].completed);
}

#[test]
fn deleting_the_first_task_keeps_only_the_second() {
    let mut app = App::new();
    add_task(&mut app, "A", "", due(2025, 1, 2));
    add_task(&mut app, "B", "", due(2025, 1, 3));

    enter_list(&mut app);
    press(&mut app, KeyCode::Char('D'));

    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.tasks()[0].name, "B");
}

#[test]
fn toggle_toggle_delete_empties_the_list() {
    let mut app = App::new();
    add_task(&mut app, "A", "", due(2025, 1, 2));

    enter_list(&mut app);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.store.tasks()[0].completed);
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.store.tasks()[0].completed);
    press(&mut app, KeyCode::Char('D'));

    assert!(app.store.is_empty());
}

#[test]
fn tasks_stay_in_insertion_order() {
    let mut app = App::new();
    for name in ["one", "two", "three", "four"] {
        add_task(&mut app, name, "", due(2025, 1, 2));
    }

    let names: Vec<_> = app.store.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["one", "two", "three", "four"]);
}
