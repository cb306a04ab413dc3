//! Employee form rendering

use super::field_renderer::{draw_help_text, draw_level_field, draw_text_field, TEXT_FIELD_HEIGHT};
use crate::state::{EmployeeForm, FieldId};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const SUBMIT_LABEL: &str = "Add";

/// Draw the employee form: name, position, level and the Add button
pub fn draw_employee_form(frame: &mut Frame, area: Rect, form: &EmployeeForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT), // Name + message
            Constraint::Length(TEXT_FIELD_HEIGHT), // Position + message
            Constraint::Length(3),                 // Level
            Constraint::Length(BUTTON_HEIGHT),     // Add
            Constraint::Min(0),                    // Remaining space
            Constraint::Length(1),                 // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Employee ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let focused = form.focused_field();
    let state = form.state();

    draw_text_field(
        frame,
        chunks[0],
        &state.name,
        focused == Some(FieldId::Name),
    );
    draw_text_field(
        frame,
        chunks[1],
        &state.position,
        focused == Some(FieldId::Position),
    );
    draw_level_field(
        frame,
        chunks[2],
        &state.level,
        focused == Some(FieldId::Level),
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(SUBMIT_LABEL)),
            Constraint::Min(0),
        ])
        .split(chunks[3])[0];
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        form.is_submit_focused(),
        form.can_submit(),
        Color::Green,
    );

    let mut hints = vec![("Tab", "next field")];
    if focused == Some(FieldId::Level) {
        hints.push(("←/→", "level"));
    }
    hints.push(("Enter", "add"));
    hints.push(("Esc", "quit"));
    draw_help_text(frame, chunks[5], &hints);
}
