//! Layout components (form area, side panel, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the events panel on the right
const SIDE_PANEL_WIDTH: u16 = 46;

/// Split the screen into the form area and, when shown, the side panel.
/// The bottom line is reserved for the status bar.
pub fn create_layout(area: Rect, show_side_panel: bool) -> (Rect, Option<Rect>) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    if !show_side_panel {
        return (main_chunks[0], None);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form
            Constraint::Length(SIDE_PANEL_WIDTH), // Events
        ])
        .split(main_chunks[0]);

    (chunks[0], Some(chunks[1]))
}

/// Draw the status bar on the last screen row
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let validity = if !app.state.form_connected {
        Span::styled(" ○ closed ", Style::default().fg(Color::Red))
    } else if app.form.is_valid() {
        Span::styled(" ● valid ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ incomplete ", Style::default().fg(Color::Yellow))
    };
    spans.push(validity);

    spans.push(Span::styled(
        format!(
            "{}: add  {}: reload initial state",
            crate::platform::SUBMIT_SHORTCUT,
            crate::platform::RELOAD_SHORTCUT
        ),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
