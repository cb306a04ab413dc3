//! Application state module

mod app_state;
mod employee;
mod forms;

pub use app_state::*;
pub use employee::*;
pub use forms::*;
