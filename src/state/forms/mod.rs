//! Form domain layer
//!
//! Headless form handling: field values, validation, focus and the events a
//! form reports to its host. Rendering lives in `ui::forms`.

mod employee_form;
mod events;
mod field;
mod form_state;
mod validation;

pub use employee_form::EmployeeForm;
pub use events::{channel, dispatch_events, FormEvent, FormEventHandler};
pub use field::FormField;
pub use form_state::{FieldId, Form};
#[cfg(test)]
pub use form_state::{NAME_ERROR, POSITION_ERROR};
