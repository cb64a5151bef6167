//! Registration form domain layer
//!
//! Field rules, inline error display and the controller that wires them to
//! blur, input, submit and timer events.

#![allow(dead_code)]

mod controller;
mod display;
mod events;
mod field;
mod rules;

pub use controller::{FormController, Timing};
pub use events::{FormEvent, SubmitOutcome};
pub use field::FieldId;

#[cfg(test)]
pub use display::{clear_error, show_error};
#[cfg(test)]
pub use field::FieldStatus;
