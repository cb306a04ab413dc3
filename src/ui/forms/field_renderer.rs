//! Field rendering utilities for forms

use crate::state::{FormField, Level};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text field: bordered input plus one line for its message
pub const TEXT_FIELD_HEIGHT: u16 = 4;

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_title(field: &FormField) -> String {
    if field.validators.is_empty() {
        format!(" {} ", field.label)
    } else {
        format!(" {} * ", field.label)
    }
}

/// Draw a single-line text field with its inline validation message
pub fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let error = field.visible_error();

    let value = field.as_text();
    let value_span = if value.is_empty() && !is_active {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Span::styled(value, style)
    };
    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let input = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block);
    frame.render_widget(input, input_area);

    if let Some(message) = error {
        if area.height > 3 {
            let message_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            let paragraph =
                Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
            frame.render_widget(paragraph, message_area);
        }
    }
}

/// Radio-style rendering of the level choices, e.g. `(•) Junior  ( ) Mid`
pub fn level_options_line(selected: Level, is_active: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, level) in Level::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let is_selected = *level == selected;
        let marker = if is_selected { "(•) " } else { "( ) " };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker}{}", level.label()), style));
    }
    Line::from(spans)
}

/// Draw the level radio group
pub fn draw_level_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, false));

    let paragraph = Paragraph::new(level_options_line(field.as_level(), is_active)).block(block);
    frame.render_widget(paragraph, area);
}

/// Draw one-line key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
