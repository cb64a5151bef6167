//! Events the form reacts to

use super::field::FieldId;
use crate::state::timers::TimerKind;

/// Something that happened to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left a field
    Blur(FieldId),
    /// A field's value changed
    Input(FieldId),
    /// The form was submitted
    Submit,
    /// A scheduled timer expired
    Timer(TimerKind),
}

/// What a submit attempt produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the banner is up and a reset is scheduled
    Accepted,
    /// At least one field failed; errors are shown inline
    Rejected { failed: usize },
}
