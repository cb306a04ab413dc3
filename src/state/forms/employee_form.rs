//! The employee form component
//!
//! Owns a [`FormState`], validates it on every query and reports edits and
//! submissions to its host through [`FormOutputs`].
//!
//! Lifecycle:
//! 1. [`EmployeeForm::new`] builds the defaults, applies the optional initial
//!    state, then subscribes the outputs. Seeding emits nothing.
//! 2. [`EmployeeForm::set_initial_state`] overwrites every field from a new
//!    initial state, discarding unsaved edits, and emits one value change.
//! 3. [`EmployeeForm::destroy`] (or drop) releases the outputs; nothing is
//!    emitted afterwards.

use super::events::{FormEvent, FormOutputs};
use super::field::FormField;
use super::form_state::{FieldId, Form, FormState};
use crate::state::{Employee, EmployeeInput, Level};

/// Focus index of the submit button, after the three fields
pub const SUBMIT_BUTTON_INDEX: usize = 3;

#[derive(Debug)]
pub struct EmployeeForm {
    state: FormState,
    active_field_index: usize,
    outputs: Option<FormOutputs>,
}

impl EmployeeForm {
    pub fn new(outputs: FormOutputs, initial_state: Option<&EmployeeInput>) -> Self {
        let mut state = FormState::new();
        if let Some(input) = initial_state {
            state.apply(input);
        }
        tracing::debug!(seeded = initial_state.is_some(), "employee form initialized");
        Self {
            state,
            active_field_index: 0,
            outputs: Some(outputs),
        }
    }

    /// Re-seed the form from a changed initial state.
    ///
    /// Every field is overwritten, including ones the user has edited.
    pub fn set_initial_state(&mut self, initial_state: Option<&EmployeeInput>) {
        let Some(input) = initial_state else {
            return;
        };
        self.state.apply(input);
        self.emit_value_changed();
    }

    /// Release the outputs. Later edits and submissions are silent.
    pub fn destroy(&mut self) {
        if self.outputs.take().is_some() {
            tracing::debug!("employee form destroyed");
        }
    }

    #[allow(dead_code)]
    pub fn is_subscribed(&self) -> bool {
        self.outputs.is_some()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self) -> Employee {
        self.state.value()
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid()
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Inline message for a field, shown only once it is touched and invalid
    pub fn error_message(&self, id: FieldId) -> Option<&'static str> {
        self.state.field(id).visible_error()
    }

    /// Mark a field as interacted with
    pub fn touch(&mut self, id: FieldId) {
        self.state.field_mut(id).mark_touched();
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        let changed = self
            .get_active_field_mut()
            .is_some_and(|field| field.push_char(c));
        if changed {
            self.emit_value_changed();
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let changed = self
            .get_active_field_mut()
            .is_some_and(|field| field.pop_char());
        if changed {
            self.emit_value_changed();
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.state.name.set_text(name) {
            self.emit_value_changed();
        }
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        if self.state.position.set_text(position) {
            self.emit_value_changed();
        }
    }

    pub fn select_level(&mut self, level: Level) {
        if self.state.level.set_level(level) {
            self.emit_value_changed();
        }
    }

    pub fn next_level(&mut self) {
        self.select_level(self.state.level.as_level().next());
    }

    pub fn prev_level(&mut self) {
        self.select_level(self.state.level.as_level().prev());
    }

    /// Submit the form.
    ///
    /// Does nothing unless every field is valid. Returns true when a
    /// submission was emitted.
    pub fn submit(&mut self) -> bool {
        if !self.is_valid() {
            tracing::debug!("submit ignored, form is invalid");
            return false;
        }
        let Some(outputs) = &self.outputs else {
            return false;
        };
        let value = self.state.value();
        tracing::info!(name = %value.name, level = %value.level, "employee submitted");
        outputs.emit(FormEvent::Submitted(value));
        true
    }

    fn emit_value_changed(&self) {
        if let Some(outputs) = &self.outputs {
            outputs.emit(FormEvent::ValueChanged(self.state.value()));
        }
    }
}

impl Form for EmployeeForm {
    fn field_count(&self) -> usize {
        4 // name, position, level, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_BUTTON_INDEX);
        if index == self.active_field_index {
            return;
        }
        // Losing focus is what marks a field touched
        if let Some(id) = self.focused_field() {
            self.touch(id);
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.focused_field()?;
        Some(self.state.field_mut(id))
    }
}
