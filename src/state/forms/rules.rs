//! Field rules
//!
//! Pure checks from a raw input value to a verdict. Nothing here touches the
//! document; the controller decides how a verdict is shown. These are
//! syntactic pre-checks only and say nothing about whether an address or
//! number actually exists.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::FieldId;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ASCII only: `\d` would also accept other Unicode digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("phone pattern compiles"));

/// Why a field was rejected. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Full name must be at least 3 characters")]
    FullNameTooShort,

    #[error("Email is required")]
    EmailRequired,
    #[error("Email must contain @ symbol")]
    EmailMissingAt,
    #[error("Email must contain a domain (.)")]
    EmailMissingDot,
    #[error("Please enter a valid email format")]
    EmailInvalidFormat,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must contain only digits (0-9)")]
    PhoneNotDigits,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,
}

impl ValidationError {
    /// Field this error belongs to
    pub fn field(&self) -> FieldId {
        match self {
            Self::FullNameRequired | Self::FullNameTooShort => FieldId::FullName,
            Self::EmailRequired
            | Self::EmailMissingAt
            | Self::EmailMissingDot
            | Self::EmailInvalidFormat => FieldId::Email,
            Self::PasswordRequired | Self::PasswordTooShort => FieldId::Password,
            Self::ConfirmRequired | Self::PasswordMismatch => FieldId::ConfirmPassword,
            Self::PhoneRequired | Self::PhoneNotDigits | Self::PhoneTooShort => FieldId::Phone,
        }
    }
}

pub type Verdict = Result<(), ValidationError>;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn check_full_name(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::FullNameRequired);
    }
    if char_len(value) < MIN_NAME_LEN {
        return Err(ValidationError::FullNameTooShort);
    }
    Ok(())
}

pub fn check_email(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !value.contains('@') {
        return Err(ValidationError::EmailMissingAt);
    }
    if !value.contains('.') {
        return Err(ValidationError::EmailMissingDot);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::EmailInvalidFormat);
    }
    Ok(())
}

/// Passwords are never trimmed
pub fn check_password(value: &str) -> Verdict {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if char_len(value) < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn check_confirm_password(value: &str, password: &str) -> Verdict {
    if value.is_empty() {
        return Err(ValidationError::ConfirmRequired);
    }
    if value != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn check_phone(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if !PHONE_RE.is_match(value) {
        return Err(ValidationError::PhoneNotDigits);
    }
    if char_len(value) < MIN_PHONE_LEN {
        return Err(ValidationError::PhoneTooShort);
    }
    Ok(())
}

/// Whether a password value is long enough to drop its error while typing
pub fn password_long_enough(value: &str) -> bool {
    char_len(value) >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    mod full_name {
        use super::*;

        #[test]
        fn test_empty_and_blank_are_required() {
            assert_eq!(check_full_name(""), Err(ValidationError::FullNameRequired));
            assert_eq!(
                check_full_name("   \t"),
                Err(ValidationError::FullNameRequired)
            );
        }

        #[test]
        fn test_length_counts_after_trim() {
            assert_eq!(
                check_full_name("  ab  "),
                Err(ValidationError::FullNameTooShort)
            );
            assert_eq!(check_full_name(" abc "), Ok(()));
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            assert_eq!(check_full_name("Zoë"), Ok(()));
            assert_eq!(check_full_name("Jö"), Err(ValidationError::FullNameTooShort));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_passes() {
            assert_eq!(check_email("a@b.c"), Ok(()));
            assert_eq!(check_email("  student@uni.edu  "), Ok(()));
        }

        #[test]
        fn test_rule_order() {
            assert_eq!(check_email(""), Err(ValidationError::EmailRequired));
            assert_eq!(check_email("ab.c"), Err(ValidationError::EmailMissingAt));
            assert_eq!(check_email("a@bc"), Err(ValidationError::EmailMissingDot));
            // No @ and no dot reports the @ first
            assert_eq!(check_email("abc"), Err(ValidationError::EmailMissingAt));
        }

        #[test]
        fn test_format_rejects_inner_space() {
            assert_eq!(
                check_email("a @b.c"),
                Err(ValidationError::EmailInvalidFormat)
            );
        }

        #[test]
        fn test_format_rejects_structural_problems() {
            for bad in ["a@@b.c", "@b.c", "a@b.", "a.b@c", "a@.c"] {
                assert_eq!(
                    check_email(bad),
                    Err(ValidationError::EmailInvalidFormat),
                    "{bad}"
                );
            }
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_required_and_length() {
            assert_eq!(check_password(""), Err(ValidationError::PasswordRequired));
            assert_eq!(
                check_password("12345"),
                Err(ValidationError::PasswordTooShort)
            );
            assert_eq!(check_password("123456"), Ok(()));
        }

        #[test]
        fn test_whitespace_is_not_trimmed() {
            assert_eq!(check_password("      "), Ok(()));
            assert_eq!(
                check_password(" abc "),
                Err(ValidationError::PasswordTooShort)
            );
        }

        #[test]
        fn test_long_enough_threshold() {
            assert!(!password_long_enough("abcde"));
            assert!(password_long_enough("abcdef"));
        }
    }

    mod confirm_password {
        use super::*;

        #[test]
        fn test_required() {
            assert_eq!(
                check_confirm_password("", "secret1"),
                Err(ValidationError::ConfirmRequired)
            );
            // Empty wins even when the password is empty too
            assert_eq!(
                check_confirm_password("", ""),
                Err(ValidationError::ConfirmRequired)
            );
        }

        #[test]
        fn test_exact_match() {
            assert_eq!(check_confirm_password("secret1", "secret1"), Ok(()));
            assert_eq!(
                check_confirm_password("secret1 ", "secret1"),
                Err(ValidationError::PasswordMismatch)
            );
            assert_eq!(
                check_confirm_password("Secret1", "secret1"),
                Err(ValidationError::PasswordMismatch)
            );
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_rule_order() {
            assert_eq!(check_phone("  "), Err(ValidationError::PhoneRequired));
            assert_eq!(
                check_phone("12345abcde"),
                Err(ValidationError::PhoneNotDigits)
            );
            assert_eq!(check_phone("12345"), Err(ValidationError::PhoneTooShort));
            assert_eq!(check_phone("1234567890"), Ok(()));
        }

        #[test]
        fn test_separators_are_not_digits() {
            assert_eq!(
                check_phone("+1234567890"),
                Err(ValidationError::PhoneNotDigits)
            );
            assert_eq!(
                check_phone("123-456-7890"),
                Err(ValidationError::PhoneNotDigits)
            );
        }

        #[test]
        fn test_non_ascii_digits_rejected() {
            assert_eq!(
                check_phone("١٢٣٤٥٦٧٨٩٠"),
                Err(ValidationError::PhoneNotDigits)
            );
        }

        #[test]
        fn test_surrounding_whitespace_trimmed() {
            assert_eq!(check_phone(" 1234567890 "), Ok(()));
        }
    }

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            ValidationError::EmailMissingDot.to_string(),
            "Email must contain a domain (.)"
        );
        assert_eq!(
            ValidationError::PhoneNotDigits.to_string(),
            "Phone number must contain only digits (0-9)"
        );
        assert_eq!(
            ValidationError::ConfirmRequired.to_string(),
            "Please confirm your password"
        );
    }

    #[test]
    fn test_error_field_mapping() {
        assert_eq!(ValidationError::EmailInvalidFormat.field(), FieldId::Email);
        assert_eq!(
            ValidationError::PasswordMismatch.field(),
            FieldId::ConfirmPassword
        );
        assert_eq!(ValidationError::PhoneTooShort.field(), FieldId::Phone);
    }
}
