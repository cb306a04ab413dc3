//! Side panel showing what the host received from the form

use super::widgets::render_scrollable_list;
use crate::state::{AppState, EventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the live value and the event log
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Live value
            Constraint::Min(0),    // Events
        ])
        .split(area);

    draw_live_value(frame, chunks[0], state);
    draw_event_log(frame, chunks[1], state);
}

fn draw_live_value(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match &state.live_value {
        Some(value) => serde_json::to_string_pretty(value)
            .unwrap_or_else(|err| format!("<unserializable: {err}>")),
        None => "No edits yet.".to_string(),
    };
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Live Value ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_event_log(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" Events ({} added) ", state.submitted_count());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if state.event_log.is_empty() {
        let empty = Paragraph::new("Waiting for the form...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .event_log
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                EventKind::ValueChanged => Style::default().fg(Color::Gray),
                EventKind::Submitted => Style::default().fg(Color::Green),
            };
            ListItem::new(entry.summary()).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, state.selected_index);
}
