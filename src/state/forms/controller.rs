//! Registration form controller
//!
//! Binds the five registration fields of a [`Host`] document, runs their
//! rules, reflects verdicts back into the document and drives the success
//! banner and delayed reset through a [`Scheduler`].

use std::time::Duration;

use thiserror::Error;

use super::display::{clear_error, mark_container, neutralize, show_error};
use super::events::{FormEvent, SubmitOutcome};
use super::field::{FieldId, FieldStatus};
use super::rules::{self, Verdict};
use crate::state::document::{classes, ids, Host};
use crate::state::timers::{Scheduler, TimerKind};

/// Every element the controller reads or writes
pub const REQUIRED_IDS: [&str; 12] = [
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
];

/// Binding the controller to a document that lacks part of the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("element #{0} not found in host document")]
    MissingElement(&'static str),
    #[error("input #{0} has no container element")]
    MissingContainer(&'static str),
}

/// Delays applied after a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long the success banner stays up
    pub banner: Duration,
    /// How long until the form is wiped
    pub reset: Duration,
}

impl Timing {
    pub const DEFAULT_BANNER_MS: u64 = 5000;
    pub const DEFAULT_RESET_MS: u64 = 2000;
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            banner: Duration::from_millis(Self::DEFAULT_BANNER_MS),
            reset: Duration::from_millis(Self::DEFAULT_RESET_MS),
        }
    }
}

/// The registration form bound to a host document
#[derive(Debug)]
pub struct FormController<H: Host, S: Scheduler> {
    host: H,
    scheduler: S,
    timing: Timing,
    statuses: [FieldStatus; 5],
}

impl<H: Host, S: Scheduler> FormController<H, S> {
    /// Bind to `host`, checking that every form element is present
    pub fn bind(host: H, scheduler: S, timing: Timing) -> Result<Self, BindError> {
        if let Some(missing) = REQUIRED_IDS.iter().find(|id| !host.contains(id)) {
            return Err(BindError::MissingElement(*missing));
        }
        for field in FieldId::ALL {
            if host.container_of(field.input_id()).is_none() {
                return Err(BindError::MissingContainer(field.input_id()));
            }
        }

        tracing::debug!("Bound registration form ({} elements)", REQUIRED_IDS.len());
        Ok(Self {
            host,
            scheduler,
            timing,
            statuses: [FieldStatus::Untouched; 5],
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access for editing input values
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        self.statuses[field.index()]
    }

    /// Whether every field's current value passes its rules
    ///
    /// Reads values afresh rather than the recorded statuses, which the
    /// password input shortcut can leave at `Valid` after the value shrinks.
    pub fn is_ready(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.check(*field).is_ok())
    }

    pub fn is_banner_visible(&self) -> bool {
        self.host.has_class(ids::SUCCESS_MESSAGE, classes::SHOW)
    }

    /// Run the rules for `field` without touching the document
    pub fn check(&self, field: FieldId) -> Verdict {
        let value = self.host.value(field.input_id());
        match field {
            FieldId::FullName => rules::check_full_name(&value),
            FieldId::Email => rules::check_email(&value),
            FieldId::Password => rules::check_password(&value),
            FieldId::ConfirmPassword => {
                let password = self.host.value(ids::PASSWORD);
                rules::check_confirm_password(&value, &password)
            }
            FieldId::Phone => rules::check_phone(&value),
        }
    }

    /// Validate one field and show the result inline
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let verdict = self.check(field);
        self.present(field, verdict)
    }

    pub fn validate_full_name(&mut self) -> bool {
        self.validate_field(FieldId::FullName)
    }

    pub fn validate_email(&mut self) -> bool {
        self.validate_field(FieldId::Email)
    }

    pub fn validate_password(&mut self) -> bool {
        self.validate_field(FieldId::Password)
    }

    pub fn validate_confirm_password(&mut self) -> bool {
        self.validate_field(FieldId::ConfirmPassword)
    }

    pub fn validate_phone(&mut self) -> bool {
        self.validate_field(FieldId::Phone)
    }

    /// Validate every field so all errors show at once
    pub fn validate_form(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldId::ALL {
            // Non-short-circuiting: every field must be evaluated
            all_valid &= self.validate_field(field);
        }
        all_valid
    }

    fn present(&mut self, field: FieldId, verdict: Verdict) -> bool {
        let passed = match verdict {
            Ok(()) => {
                clear_error(&mut self.host, field);
                true
            }
            Err(err) => {
                show_error(&mut self.host, field, &err.to_string());
                false
            }
        };
        mark_container(&mut self.host, field, !passed);
        self.statuses[field.index()] = FieldStatus::from_verdict(passed);

        tracing::debug!(?field, passed, "Field validated");
        passed
    }

    /// Wipe all values and validation state and hide the banner
    pub fn reset_form(&mut self) {
        for field in FieldId::ALL {
            neutralize(&mut self.host, field);
        }
        self.statuses = [FieldStatus::Untouched; 5];
        self.hide_success_message();
        tracing::info!("Registration form reset");
    }

    /// Disarm any pending banner or reset timer, then reset
    pub fn discard(&mut self) {
        self.scheduler.cancel(TimerKind::HideBanner);
        self.scheduler.cancel(TimerKind::ResetForm);
        self.reset_form();
    }

    /// Show the banner and arm its auto-hide
    pub fn show_success_message(&mut self) {
        self.host.add_class(ids::SUCCESS_MESSAGE, classes::SHOW);
        self.scheduler
            .schedule(TimerKind::HideBanner, self.timing.banner);
    }

    pub fn hide_success_message(&mut self) {
        self.host.remove_class(ids::SUCCESS_MESSAGE, classes::SHOW);
    }

    /// Validate everything and, if it all passes, confirm and schedule a reset
    ///
    /// Nothing is sent anywhere; acceptance only shows the banner.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.validate_form() {
            self.show_success_message();
            self.scheduler
                .schedule(TimerKind::ResetForm, self.timing.reset);
            tracing::info!("Registration form accepted");
            SubmitOutcome::Accepted
        } else {
            let failed = self
                .statuses
                .iter()
                .filter(|s| **s == FieldStatus::Invalid)
                .count();
            tracing::debug!(failed, "Registration form rejected");
            SubmitOutcome::Rejected { failed }
        }
    }

    /// Dispatch a form event. Returns the outcome for `Submit`.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Blur(field) => {
                self.validate_field(field);
            }
            FormEvent::Input(FieldId::ConfirmPassword) => {
                if !self.host.value(ids::CONFIRM_PASSWORD).is_empty() {
                    self.validate_confirm_password();
                }
            }
            FormEvent::Input(FieldId::Password) => {
                // Drops the error as soon as the length is fine, without a
                // full rule run and without touching the container flag
                if rules::password_long_enough(&self.host.value(ids::PASSWORD)) {
                    clear_error(&mut self.host, FieldId::Password);
                    self.statuses[FieldId::Password.index()] = FieldStatus::Valid;
                }
            }
            FormEvent::Input(_) => {}
            FormEvent::Submit => return Some(self.submit()),
            FormEvent::Timer(TimerKind::HideBanner) => self.hide_success_message(),
            FormEvent::Timer(TimerKind::ResetForm) => self.reset_form(),
        }
        None
    }
}
