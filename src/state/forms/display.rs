//! Inline error display

use super::field::FieldId;
use crate::state::document::{classes, Host};

/// Put `message` in the field's error slot and mark the input as failing
pub fn show_error<H: Host + ?Sized>(host: &mut H, field: FieldId, message: &str) {
    let slot = field.error_id();
    host.set_text(slot, message);
    host.add_class(slot, classes::SHOW);

    let input = field.input_id();
    host.add_class(input, classes::ERROR_INPUT);
    host.remove_class(input, classes::SUCCESS_INPUT);
}

/// Empty the field's error slot and mark the input as passing
pub fn clear_error<H: Host + ?Sized>(host: &mut H, field: FieldId) {
    let slot = field.error_id();
    host.set_text(slot, "");
    host.remove_class(slot, classes::SHOW);

    let input = field.input_id();
    host.remove_class(input, classes::ERROR_INPUT);
    host.add_class(input, classes::SUCCESS_INPUT);
}

/// Flag or unflag the element wrapping the field's input
pub fn mark_container<H: Host + ?Sized>(host: &mut H, field: FieldId, failed: bool) {
    let Some(container) = host.container_of(field.input_id()) else {
        return;
    };
    if failed {
        host.add_class(&container, classes::ERROR);
    } else {
        host.remove_class(&container, classes::ERROR);
    }
}

/// Drop every trace of validation from a field, including its value
pub fn neutralize<H: Host + ?Sized>(host: &mut H, field: FieldId) {
    let input = field.input_id();
    host.set_value(input, "");
    host.remove_class(input, classes::ERROR_INPUT);
    host.remove_class(input, classes::SUCCESS_INPUT);

    let slot = field.error_id();
    host.set_text(slot, "");
    host.remove_class(slot, classes::SHOW);

    mark_container(host, field, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::document::Document;

    #[test]
    fn test_show_error_sets_slot_and_input_state() {
        let mut doc = Document::signup_page();
        doc.add_class("email", classes::SUCCESS_INPUT);

        show_error(&mut doc, FieldId::Email, "Email is required");

        assert_eq!(doc.text("emailError"), "Email is required");
        assert!(doc.has_class("emailError", classes::SHOW));
        assert!(doc.has_class("email", classes::ERROR_INPUT));
        assert!(!doc.has_class("email", classes::SUCCESS_INPUT));
    }

    #[test]
    fn test_clear_error_is_inverse_of_show() {
        let mut doc = Document::signup_page();
        show_error(&mut doc, FieldId::Phone, "Phone number is required");
        clear_error(&mut doc, FieldId::Phone);

        assert_eq!(doc.text("phoneError"), "");
        assert!(!doc.has_class("phoneError", classes::SHOW));
        assert!(!doc.has_class("phone", classes::ERROR_INPUT));
        assert!(doc.has_class("phone", classes::SUCCESS_INPUT));
    }

    #[test]
    fn test_show_error_replaces_previous_message() {
        let mut doc = Document::signup_page();
        show_error(&mut doc, FieldId::Email, "Email is required");
        show_error(&mut doc, FieldId::Email, "Email must contain @ symbol");
        assert_eq!(doc.text("emailError"), "Email must contain @ symbol");
    }

    #[test]
    fn test_primitives_leave_other_fields_alone() {
        let mut doc = Document::signup_page();
        show_error(&mut doc, FieldId::FullName, "Full name is required");
        assert_eq!(doc.text("emailError"), "");
        assert!(!doc.has_class("email", classes::ERROR_INPUT));
        assert!(!doc.has_class("email", classes::SUCCESS_INPUT));
    }

    #[test]
    fn test_mark_container() {
        let mut doc = Document::signup_page();
        mark_container(&mut doc, FieldId::Password, true);
        assert!(doc.has_class("passwordGroup", classes::ERROR));
        mark_container(&mut doc, FieldId::Password, false);
        assert!(!doc.has_class("passwordGroup", classes::ERROR));
    }

    #[test]
    fn test_neutralize_wipes_everything() {
        let mut doc = Document::signup_page();
        doc.set_value("fullName", "Al");
        show_error(&mut doc, FieldId::FullName, "Full name must be at least 3 characters");
        mark_container(&mut doc, FieldId::FullName, true);

        neutralize(&mut doc, FieldId::FullName);

        assert_eq!(doc.value("fullName"), "");
        assert_eq!(doc.text("fullNameError"), "");
        assert!(doc.get("fullName").unwrap().classes.is_empty());
        assert!(doc.get("fullNameError").unwrap().classes.is_empty());
        assert!(doc.get("fullNameGroup").unwrap().classes.is_empty());
    }
}
