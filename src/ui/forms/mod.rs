//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `employee_form`: The employee create/edit form

mod employee_form;
mod field_renderer;

pub use employee_form::draw_employee_form;
