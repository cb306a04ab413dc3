//! UI module for rendering the TUI

mod components;
mod events_panel;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, side_area) = layout::create_layout(area, app.state.show_event_log);

    forms::draw_employee_form(frame, form_area, &app.form);

    if let Some(side_area) = side_area {
        events_panel::draw(frame, side_area, &app.state);
    }

    layout::draw_status_bar(frame, app);
}
