//! Host document the form controller is bound to
//!
//! The controller never talks to a concrete UI. It reads input values and
//! toggles state classes through [`Host`], addressing elements by id. The
//! terminal front end renders an in-memory [`Document`] by looking at the
//! same ids and classes.

use std::collections::{BTreeMap, BTreeSet};

/// Element ids the registration page must provide
pub mod ids {
    pub const FORM: &str = "signupForm";
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const PHONE: &str = "phone";
    pub const SUCCESS_MESSAGE: &str = "successMessage";
    pub const FULL_NAME_ERROR: &str = "fullNameError";
    pub const EMAIL_ERROR: &str = "emailError";
    pub const PASSWORD_ERROR: &str = "passwordError";
    pub const CONFIRM_PASSWORD_ERROR: &str = "confirmPasswordError";
    pub const PHONE_ERROR: &str = "phoneError";
}

/// State classes applied to elements
pub mod classes {
    /// On an input whose last verdict failed
    pub const ERROR_INPUT: &str = "error-input";
    /// On an input whose last verdict passed
    pub const SUCCESS_INPUT: &str = "success-input";
    /// On the container of a failing field
    pub const ERROR: &str = "error";
    /// On visible error slots and on the visible success banner
    pub const SHOW: &str = "show";
}

/// Text shown in the success banner
pub const SUCCESS_TEXT: &str = "Registration successful! Welcome aboard.";

/// Adapter over whatever document the form lives in
pub trait Host {
    /// Whether an element with this id exists
    fn contains(&self, id: &str) -> bool;

    /// Current value of an input (empty for unknown ids)
    fn value(&self, id: &str) -> String;

    fn set_value(&mut self, id: &str, value: &str);

    /// Text content of an element (empty for unknown ids)
    fn text_content(&self, id: &str) -> String;

    fn set_text(&mut self, id: &str, text: &str);

    fn add_class(&mut self, id: &str, class: &str);

    fn remove_class(&mut self, id: &str, class: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Id of the element wrapping this one, if any
    fn container_of(&self, id: &str) -> Option<String>;
}

/// A single element of the in-memory document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    /// Input value (unused for non-input elements)
    pub value: String,
    /// Text content
    pub text: String,
    pub classes: BTreeSet<String>,
    pub parent: Option<String>,
}

impl Element {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_parent(id: &str, parent: &str) -> Self {
        Self {
            id: id.to_string(),
            parent: Some(parent.to_string()),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

/// In-memory document keyed by element id
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the student registration page
    ///
    /// Every input sits inside a `<id>Group` container together with its
    /// error slot, and the whole set hangs off the form element.
    pub fn signup_page() -> Self {
        let mut doc = Self::new();
        doc.insert(Element::new(ids::FORM));

        let fields = [
            (ids::FULL_NAME, ids::FULL_NAME_ERROR),
            (ids::EMAIL, ids::EMAIL_ERROR),
            (ids::PASSWORD, ids::PASSWORD_ERROR),
            (ids::CONFIRM_PASSWORD, ids::CONFIRM_PASSWORD_ERROR),
            (ids::PHONE, ids::PHONE_ERROR),
        ];
        for (input, slot) in fields {
            let group = format!("{input}Group");
            doc.insert(Element::with_parent(&group, ids::FORM));
            doc.insert(Element::with_parent(input, &group));
            doc.insert(Element::with_parent(slot, &group));
        }

        doc.insert(Element::with_parent(ids::SUCCESS_MESSAGE, ids::FORM).with_text(SUCCESS_TEXT));
        doc
    }

    /// Add or replace an element
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    #[cfg(test)]
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Text content of an element (empty for unknown ids)
    pub fn text(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            tracing::warn!("No element with id {id:?} in document");
        }
        element
    }
}

impl Host for Document {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> String {
        self.elements
            .get(id)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.value = value.to_string();
        }
    }

    fn text_content(&self, id: &str) -> String {
        self.text(id).to_string()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
        }
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes.remove(class);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn container_of(&self, id: &str) -> Option<String> {
        self.elements.get(id).and_then(|e| e.parent.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_page_has_every_contract_id() {
        let doc = Document::signup_page();
        for id in [
            ids::FORM,
            ids::FULL_NAME,
            ids::EMAIL,
            ids::PASSWORD,
            ids::CONFIRM_PASSWORD,
            ids::PHONE,
            ids::SUCCESS_MESSAGE,
            ids::FULL_NAME_ERROR,
            ids::EMAIL_ERROR,
            ids::PASSWORD_ERROR,
            ids::CONFIRM_PASSWORD_ERROR,
            ids::PHONE_ERROR,
        ] {
            assert!(doc.contains(id), "missing {id}");
        }
    }

    #[test]
    fn test_inputs_live_in_their_group() {
        let doc = Document::signup_page();
        assert_eq!(doc.container_of(ids::EMAIL), Some("emailGroup".to_string()));
        assert_eq!(
            doc.container_of(ids::EMAIL_ERROR),
            Some("emailGroup".to_string())
        );
        assert_eq!(doc.container_of("emailGroup"), Some(ids::FORM.to_string()));
        assert!(doc.container_of(ids::FORM).is_none());
    }

    #[test]
    fn test_banner_starts_hidden_with_text() {
        let doc = Document::signup_page();
        assert!(!doc.has_class(ids::SUCCESS_MESSAGE, classes::SHOW));
        assert_eq!(doc.text(ids::SUCCESS_MESSAGE), SUCCESS_TEXT);
    }

    #[test]
    fn test_class_toggling() {
        let mut doc = Document::signup_page();
        doc.add_class(ids::PHONE, classes::ERROR_INPUT);
        assert!(doc.has_class(ids::PHONE, classes::ERROR_INPUT));

        doc.add_class(ids::PHONE, classes::ERROR_INPUT);
        assert_eq!(doc.get(ids::PHONE).unwrap().classes.len(), 1);

        doc.remove_class(ids::PHONE, classes::ERROR_INPUT);
        assert!(!doc.has_class(ids::PHONE, classes::ERROR_INPUT));

        // Removing an absent class is a no-op
        doc.remove_class(ids::PHONE, classes::ERROR_INPUT);
    }

    #[test]
    fn test_value_and_text() {
        let mut doc = Document::signup_page();
        assert_eq!(doc.value(ids::FULL_NAME), "");
        doc.set_value(ids::FULL_NAME, "Ada Lovelace");
        assert_eq!(doc.value(ids::FULL_NAME), "Ada Lovelace");

        doc.set_text(ids::FULL_NAME_ERROR, "oops");
        assert_eq!(doc.text(ids::FULL_NAME_ERROR), "oops");
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut doc = Document::new();
        doc.set_value("nope", "x");
        doc.add_class("nope", classes::SHOW);
        assert_eq!(doc.value("nope"), "");
        assert!(!doc.has_class("nope", classes::SHOW));
        assert_eq!(doc.text("nope"), "");
    }

    #[test]
    fn test_remove_element() {
        let mut doc = Document::signup_page();
        assert!(doc.remove(ids::PHONE_ERROR).is_some());
        assert!(!doc.contains(ids::PHONE_ERROR));
    }
}
