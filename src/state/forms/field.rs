//! Registration form fields

use crate::state::document::ids;

/// One of the five registration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Phone,
    ];

    /// Id of the input element
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::FullName => ids::FULL_NAME,
            Self::Email => ids::EMAIL,
            Self::Password => ids::PASSWORD,
            Self::ConfirmPassword => ids::CONFIRM_PASSWORD,
            Self::Phone => ids::PHONE,
        }
    }

    /// Id of the error slot next to the input
    pub fn error_id(&self) -> &'static str {
        match self {
            Self::FullName => ids::FULL_NAME_ERROR,
            Self::Email => ids::EMAIL_ERROR,
            Self::Password => ids::PASSWORD_ERROR,
            Self::ConfirmPassword => ids::CONFIRM_PASSWORD_ERROR,
            Self::Phone => ids::PHONE_ERROR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Phone => "Phone",
        }
    }

    /// Password values are compared raw, everything else is trimmed first
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Position in form order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
            Self::Phone => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Per-field validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never validated since load or the last reset
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn from_verdict(passed: bool) -> Self {
        if passed {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_evaluated(&self) -> bool {
        !matches!(self, Self::Untouched)
    }
}
