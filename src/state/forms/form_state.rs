//! Form state management

use super::field::FormField;
use super::validation::Validator;
use crate::state::{Employee, EmployeeInput, Level};

pub const NAME_ERROR: &str = "Name must be at least 3 characters long.";
pub const POSITION_ERROR: &str = "Position must be at least 5 characters long.";

/// Trait for common focus handling across form controls
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Identifies one of the employee form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Position,
    Level,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Position, FieldId::Level];

    /// Field at a focus position, `None` for the submit button
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Field values, validators and touched flags of an employee form
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: FormField,
    pub position: FormField,
    pub level: FormField,
}

impl FormState {
    /// Fields with their default values
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", vec![Validator::Required, Validator::MinLength(3)])
                .with_error_message(NAME_ERROR),
            position: FormField::text(
                "position",
                "Position",
                vec![Validator::Required, Validator::MinLength(5)],
            )
            .with_error_message(POSITION_ERROR),
            level: FormField::level("level", "Level", vec![Validator::Required]),
        }
    }

    /// Overwrite every field from `input`, falling back to the default for
    /// absent or empty values. Touched flags are kept.
    pub fn apply(&mut self, input: &EmployeeInput) {
        self.name.set_text(non_empty(&input.name).unwrap_or_default());
        self.position
            .set_text(non_empty(&input.position).unwrap_or_default());
        self.level.set_level(parse_level(input.level.as_deref()));
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Position => &self.position,
            FieldId::Level => &self.level,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Position => &mut self.position,
            FieldId::Level => &mut self.level,
        }
    }

    pub fn is_valid(&self) -> bool {
        FieldId::ALL.iter().all(|id| self.field(*id).is_valid())
    }

    /// Snapshot of the current values
    pub fn value(&self) -> Employee {
        Employee {
            name: self.name.as_text().to_string(),
            position: self.position.as_text().to_string(),
            level: self.level.as_level(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn parse_level(value: Option<&str>) -> Level {
    match value {
        None | Some("") => Level::default(),
        Some(s) => s.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default level");
            Level::default()
        }),
    }
}
