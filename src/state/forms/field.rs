//! Form field value objects

use super::validation::{validate, ValidationError, Validator};
use crate::state::Level;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Level(Level),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value and
/// interaction state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
    pub validators: Vec<Validator>,
    /// Message shown when the field is touched and invalid
    pub error_message: Option<&'static str>,
    /// Set once the field has had focus and lost it
    pub touched: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, validators: Vec<Validator>) -> Self {
        Self {
            name,
            label,
            placeholder: label,
            value: FieldValue::Text(String::new()),
            validators,
            error_message: None,
            touched: false,
        }
    }

    /// Create a new level (radio group) field
    pub fn level(name: &'static str, label: &'static str, validators: Vec<Validator>) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            value: FieldValue::Level(Level::default()),
            validators,
            error_message: None,
            touched: false,
        }
    }

    /// Attach the inline message shown for invalid touched input
    pub fn with_error_message(mut self, message: &'static str) -> Self {
        self.error_message = Some(message);
        self
    }

    /// Get the text value (returns empty string for level fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Level(_) => "",
        }
    }

    /// Get the level value (returns the default level for text fields)
    pub fn as_level(&self) -> Level {
        match &self.value {
            FieldValue::Level(l) => *l,
            FieldValue::Text(_) => Level::default(),
        }
    }

    /// Replace the text value. Returns true if the value changed.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let value = FieldValue::Text(value.into());
        self.replace(value)
    }

    /// Replace the level value. Returns true if the value changed.
    pub fn set_level(&mut self, level: Level) -> bool {
        self.replace(FieldValue::Level(level))
    }

    fn replace(&mut self, value: FieldValue) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Push a character to a text value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Level(_) => false,
        }
    }

    /// Remove the last character of a text value. Returns true if the value changed.
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Level(_) => false,
        }
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Current validation failures, recomputed from the value
    pub fn errors(&self) -> Vec<ValidationError> {
        validate(&self.value, &self.validators)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The inline message to display, if any. Nothing is shown before the
    /// first interaction.
    pub fn visible_error(&self) -> Option<&'static str> {
        if self.touched && !self.is_valid() {
            self.error_message
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_field() -> FormField {
        FormField::text("name", "Name", vec![Validator::Required, Validator::MinLength(3)])
            .with_error_message("Name must be at least 3 characters long.")
    }

    #[test]
    fn test_text_field_defaults() {
        let field = name_field();
        assert_eq!(field.as_text(), "");
        assert_eq!(field.placeholder, "Name");
        assert!(!field.touched);
        assert_eq!(field.value, FieldValue::Text(String::new()));
    }

    #[test]
    fn test_level_field_defaults_to_junior() {
        let field = FormField::level("level", "Level", vec![Validator::Required]);
        assert_eq!(field.as_level(), Level::Junior);
        assert!(field.is_valid());
        assert_eq!(field.value, FieldValue::Level(Level::Junior));
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut field = name_field();
        assert!(field.set_text("Bob"));
        assert!(!field.set_text("Bob"));
    }

    #[test]
    fn test_set_level_reports_change() {
        let mut field = FormField::level("level", "Level", vec![Validator::Required]);
        assert!(!field.set_level(Level::Junior));
        assert!(field.set_level(Level::Senior));
        assert_eq!(field.as_level(), Level::Senior);
    }

    #[test]
    fn test_pop_char_on_empty_is_no_change() {
        let mut field = name_field();
        assert!(!field.pop_char());
        field.push_char('x');
        assert!(field.pop_char());
    }

    #[test]
    fn test_push_char_ignored_by_level_field() {
        let mut field = FormField::level("level", "Level", vec![]);
        assert!(!field.push_char('x'));
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut field = name_field();
        field.set_text("Al");
        assert!(!field.is_valid());
        assert!(field.visible_error().is_none());
        field.mark_touched();
        assert_eq!(
            field.visible_error(),
            Some("Name must be at least 3 characters long.")
        );
    }

    #[test]
    fn test_required_failure_uses_same_message() {
        let mut field = name_field();
        field.mark_touched();
        assert_eq!(field.errors(), vec![ValidationError::Required]);
        assert_eq!(
            field.visible_error(),
            Some("Name must be at least 3 characters long.")
        );
    }

    #[test]
    fn test_valid_touched_field_shows_nothing() {
        let mut field = name_field();
        field.set_text("Alice");
        field.mark_touched();
        assert!(field.visible_error().is_none());
    }
}
