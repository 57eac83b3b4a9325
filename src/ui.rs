use chrono::{Datelike, NaiveDate};
use ratatui::{
    backend::Backend,
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{
        calendar::{CalendarEventStore, Monthly},
        Block, BorderType, Borders, List, ListItem, Paragraph,
    },
    Frame,
};

use crate::app::{App, Focus};
use crate::model::{format_due_date, Task};

/// Projects the whole application state onto the frame. Called once per
/// tick; every widget is rebuilt from state.
pub fn draw<B: Backend>(frame: &mut Frame<B>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(10),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(frame.size());

    frame.render_widget(
        Paragraph::new("Tasks")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[0],
    );

    draw_text_field(
        frame,
        chunks[1],
        "Task Name",
        &app.name_input,
        app.focus == Focus::Name,
    );
    draw_text_field(
        frame,
        chunks[2],
        "Description",
        &app.description_input,
        app.focus == Focus::Description,
    );
    draw_calendar(frame, chunks[3], app.due_date, app.focus == Focus::DueDate);
    draw_add_button(frame, chunks[4], app.focus == Focus::AddButton);
    draw_task_list(frame, chunks[5], app);

    frame.render_widget(
        Paragraph::new(help_line(app.focus)).alignment(Alignment::Center),
        chunks[6],
    );
}

fn focus_style(focused: bool) -> Style {
    match focused {
        true => Style::default().fg(Color::Yellow),
        false => Style::default(),
    }
}

fn draw_text_field<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
) {
    frame.render_widget(
        Paragraph::new(value).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(focus_style(focused)),
        ),
        area,
    );
    if focused {
        frame.set_cursor(area.x + 1 + value.chars().count() as u16, area.y + 1);
    }
}

fn draw_calendar<B: Backend>(frame: &mut Frame<B>, area: Rect, due_date: NaiveDate, focused: bool) {
    let block = Block::default()
        .title(format!("Due Date: {}", format_due_date(due_date)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match calendar_date(due_date) {
        Some(selected) => {
            let mut events = CalendarEventStore::default();
            events.add(selected, Style::default().add_modifier(Modifier::REVERSED));
            frame.render_widget(
                Monthly::new(selected, events)
                    .show_month_header(Style::default().add_modifier(Modifier::BOLD))
                    .show_weekdays_header(Style::default().add_modifier(Modifier::DIM)),
                inner,
            );
        }
        None => {
            frame.render_widget(Paragraph::new(format_due_date(due_date)), inner);
        }
    }
}

// The calendar widget speaks `time`, the model speaks `chrono`.
fn calendar_date(date: NaiveDate) -> Option<time::Date> {
    let month = time::Month::try_from(date.month() as u8).ok()?;
    time::Date::from_calendar_date(date.year(), month, date.day() as u8).ok()
}

fn draw_add_button<B: Backend>(frame: &mut Frame<B>, area: Rect, focused: bool) {
    frame.render_widget(
        Paragraph::new("Add Task".bold())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(focus_style(focused)),
            ),
        area,
    );
}

fn draw_task_list<B: Backend>(frame: &mut Frame<B>, area: Rect, app: &mut App) {
    let selected = app.list_state.selected();
    let items: Vec<_> = app
        .store
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| task_row(task, selected == Some(index)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Task List")
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::List)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().add_modifier(Modifier::ITALIC))
        .highlight_symbol(">>");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn task_row(task: &Task, selected: bool) -> ListItem<'static> {
    let name_style = match task.completed {
        true => Style::default().add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
        false => Style::default().add_modifier(Modifier::BOLD),
    };

    let mut title_spans = vec![Span::styled(task.name.clone(), name_style)];
    // Toggle and delete affordances only appear on the selected row.
    if selected {
        title_spans.push(Span::raw("  "));
        title_spans.push(match task.completed {
            true => "(✓)".green(),
            false => "( )".dark_gray(),
        });
        title_spans.push(Span::raw(" "));
        title_spans.push("(✗)".red());
    }

    ListItem::new(Text::from(vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            task.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format_due_date(task.due_date),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ]))
}

fn help_line(focus: Focus) -> Line<'static> {
    let hints = match focus {
        Focus::Name | Focus::Description => "type to edit | (Enter) next | (Tab) cycle | (Esc) list",
        Focus::DueDate => "(←/→) day | (↑/↓) week | (PgUp/PgDn) month | (t) today | (Enter) next",
        Focus::AddButton => "(Enter) add task | (Tab) cycle | (Esc) list",
        Focus::List => "(j/k) move | (space) toggle | (D) delete | (q) quit",
    };
    Line::from(Span::styled(hints, Style::default().add_modifier(Modifier::DIM)))
}
