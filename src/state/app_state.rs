//! Application state definitions

use super::{Employee, FormEventHandler};
use std::collections::VecDeque;

/// Oldest entries are dropped past this many
pub const MAX_EVENT_LOG: usize = 200;

/// Kind of form event recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ValueChanged,
    Submitted,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ValueChanged => "changed",
            Self::Submitted => "submitted",
        }
    }
}

/// A form event as received by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub kind: EventKind,
    pub value: Employee,
}

impl EventLogEntry {
    /// One-line rendering for the events list
    pub fn summary(&self) -> String {
        format!(
            "{:<9} {} / {} / {}",
            self.kind.label(),
            display_or_empty(&self.value.name),
            display_or_empty(&self.value.position),
            self.value.level
        )
    }
}

fn display_or_empty(s: &str) -> &str {
    if s.is_empty() {
        "(empty)"
    } else {
        s
    }
}

/// Host-side state: what the parent view knows about its form
#[derive(Debug)]
pub struct AppState {
    /// Latest snapshot received through a value change
    pub live_value: Option<Employee>,
    /// Latest submitted record
    pub last_submitted: Option<Employee>,
    /// Events in arrival order
    pub event_log: VecDeque<EventLogEntry>,
    pub selected_index: usize,
    pub show_event_log: bool,
    /// Whether the form's outputs are still connected
    pub form_connected: bool,
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            live_value: None,
            last_submitted: None,
            event_log: VecDeque::new(),
            selected_index: 0,
            show_event_log: true,
            form_connected: true,
            status_message: None,
        }
    }
}

impl AppState {
    fn record(&mut self, kind: EventKind, value: &Employee) {
        if self.event_log.len() == MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
        self.event_log.push_back(EventLogEntry {
            kind,
            value: value.clone(),
        });
        // follow the newest entry
        self.selected_index = self.event_log.len() - 1;
    }

    pub fn submitted_count(&self) -> usize {
        self.event_log
            .iter()
            .filter(|e| e.kind == EventKind::Submitted)
            .count()
    }
}

impl FormEventHandler for AppState {
    fn value_changed(&mut self, value: &Employee) {
        self.live_value = Some(value.clone());
        self.record(EventKind::ValueChanged, value);
    }

    fn submitted(&mut self, value: &Employee) {
        self.last_submitted = Some(value.clone());
        self.status_message = Some(format!("Added {} ({})", value.name, value.level.label()));
        self.record(EventKind::Submitted, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Level;
    use pretty_assertions::assert_eq;

    fn employee(name: &str) -> Employee {
        Employee {
            name: name.to_string(),
            position: "Engineer".to_string(),
            level: Level::Mid,
        }
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(state.live_value.is_none());
        assert!(state.event_log.is_empty());
        assert!(state.show_event_log);
        assert!(state.form_connected);
    }

    #[test]
    fn test_value_changed_updates_live_value() {
        let mut state = AppState::default();
        state.value_changed(&employee("Al"));
        state.value_changed(&employee("Ali"));
        assert_eq!(state.live_value, Some(employee("Ali")));
        assert_eq!(state.event_log.len(), 2);
        assert_eq!(state.selected_index, 1);
        assert!(state.last_submitted.is_none());
    }

    #[test]
    fn test_submitted_sets_status() {
        let mut state = AppState::default();
        state.submitted(&employee("Alice"));
        assert_eq!(state.last_submitted, Some(employee("Alice")));
        assert_eq!(state.status_message.as_deref(), Some("Added Alice (Mid)"));
        assert_eq!(state.submitted_count(), 1);
    }

    #[test]
    fn test_event_log_is_capped() {
        let mut state = AppState::default();
        for i in 0..MAX_EVENT_LOG + 5 {
            state.value_changed(&employee(&i.to_string()));
        }
        assert_eq!(state.event_log.len(), MAX_EVENT_LOG);
        assert_eq!(state.event_log[0].value.name, "5");
        let newest = (MAX_EVENT_LOG + 4).to_string();
        assert_eq!(
            state.event_log.back().map(|e| e.value.name.as_str()),
            Some(newest.as_str())
        );
        assert_eq!(state.selected_index, MAX_EVENT_LOG - 1);
    }

    #[test]
    fn test_summary_marks_empty_fields() {
        let entry = EventLogEntry {
            kind: EventKind::ValueChanged,
            value: Employee::default(),
        };
        assert_eq!(entry.summary(), "changed   (empty) / (empty) / junior");
    }
}
