//! Application state and core logic
//!
//! The app is the employee form's host: it seeds the form from the config,
//! feeds it key presses and collects the events it emits.

use crate::config::TuiConfig;
use crate::state::{
    channel, dispatch_events, AppState, EmployeeForm, FieldId, Form, FormEvent, Level,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

/// Main application struct
pub struct App {
    /// Host-side state
    pub state: AppState,
    /// The hosted form
    pub form: EmployeeForm,
    /// Receiving end of the form's outputs
    events: UnboundedReceiver<FormEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let (outputs, events) = channel();
        let form = EmployeeForm::new(outputs, config.initial_state.as_ref());
        let state = AppState {
            show_event_log: config.show_event_log(),
            ..Default::default()
        };

        Self {
            state,
            form,
            events,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        let on_level = self.form.focused_field() == Some(FieldId::Level);

        match key.code {
            KeyCode::Char('c') if ctrl => self.shutdown(),
            KeyCode::Esc => self.shutdown(),
            KeyCode::Char('s') if ctrl || shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.reload_initial_state(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            // Level radio group
            KeyCode::Left | KeyCode::Char('h') if on_level => self.form.prev_level(),
            KeyCode::Right | KeyCode::Char('l') if on_level => self.form.next_level(),
            KeyCode::Char('1') if on_level => self.form.select_level(Level::Junior),
            KeyCode::Char('2') if on_level => self.form.select_level(Level::Mid),
            KeyCode::Char('3') if on_level => self.form.select_level(Level::Senior),
            // Enter submits from any control, like an HTML form
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !ctrl && !shortcut => self.form.input_char(c),
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }

        self.pump_events();
    }

    /// Deliver pending form events to the host state
    pub fn pump_events(&mut self) {
        self.state.form_connected = dispatch_events(&mut self.events, &mut self.state);
    }

    fn submit(&mut self) {
        // An invalid form only shows its inline messages
        self.form.submit();
    }

    /// Re-read the config and re-seed the form from its initial state
    fn reload_initial_state(&mut self) {
        match TuiConfig::load() {
            Ok(config) => self.apply_config(config),
            Err(err) => {
                tracing::warn!("failed to reload config: {err:#}");
                self.state.status_message = Some(format!("Config error: {err}"));
            }
        }
    }

    /// Apply a (possibly changed) configuration.
    ///
    /// The form is re-seeded from `initial_state`, discarding unsaved edits.
    pub fn apply_config(&mut self, config: TuiConfig) {
        self.state.show_event_log = config.show_event_log();
        self.state.status_message = Some(if config.initial_state.is_some() {
            "Initial state re-applied".to_string()
        } else {
            "No initial state configured".to_string()
        });
        self.form.set_initial_state(config.initial_state.as_ref());
    }

    /// Destroy the form and stop the app
    fn shutdown(&mut self) {
        self.form.destroy();
        self.quit = true;
    }
}
