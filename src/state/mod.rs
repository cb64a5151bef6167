//! Application state module

pub mod document;
mod forms;
pub mod timers;

pub use document::{Document, Host};
pub use forms::*;
pub use timers::{TimerKind, TokioScheduler};
