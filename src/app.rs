//! Application state and key handling

use crate::config::SignupConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    Document, FieldId, FormController, FormEvent, Host, SubmitOutcome, TimerKind, TokioScheduler,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

/// Five fields plus the Register button
pub const FOCUS_COUNT: usize = FieldId::ALL.len() + 1;

/// Focus index of the Register button
pub const SUBMIT_INDEX: usize = FieldId::ALL.len();

/// Main application struct
pub struct App {
    /// Registration form bound to the in-memory page
    pub form: FormController<Document, TokioScheduler>,
    /// Expired form timers
    timers: UnboundedReceiver<TimerKind>,
    /// Focused field, or [`SUBMIT_INDEX`] for the button
    pub active_index: usize,
    /// Render password values as bullets
    pub mask_passwords: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance. Must run inside a tokio runtime.
    pub fn new(config: &SignupConfig) -> Result<Self> {
        let (scheduler, timers) = TokioScheduler::new();
        let form = FormController::bind(Document::signup_page(), scheduler, config.timing())?;

        Ok(Self {
            form,
            timers,
            active_index: 0,
            mask_passwords: config.mask_passwords(),
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Currently focused field, `None` on the button
    pub fn active_field(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_index == SUBMIT_INDEX
    }

    /// Apply every timer that expired since the last call
    pub fn poll_timers(&mut self) -> usize {
        let mut fired = 0;
        while let Ok(timer) = self.timers.try_recv() {
            self.form.handle(FormEvent::Timer(timer));
            fired += 1;
        }
        fired
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit = true;
            return Ok(());
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            if let KeyCode::Char('r') = key.code {
                self.form.discard();
                self.active_index = 0;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                if let Some(field) = self.active_field() {
                    self.edit(field, |value| {
                        value.pop();
                    });
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.active_field() {
                    self.edit(field, |value| value.push(c));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Move focus forward, blurring the field being left
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_index = (self.active_index + 1) % FOCUS_COUNT;
    }

    /// Move focus backward, blurring the field being left
    pub fn prev_field(&mut self) {
        self.blur_active();
        self.active_index = if self.active_index == 0 {
            FOCUS_COUNT - 1
        } else {
            self.active_index - 1
        };
    }

    fn blur_active(&mut self) {
        if let Some(field) = self.active_field() {
            self.form.handle(FormEvent::Blur(field));
        }
    }

    fn edit(&mut self, field: FieldId, apply: impl FnOnce(&mut String)) {
        let id = field.input_id();
        let mut value = self.form.host().value(id);
        apply(&mut value);
        self.form.host_mut().set_value(id, &value);
        self.form.handle(FormEvent::Input(field));
    }

    /// Submit the form
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit();
        if let SubmitOutcome::Rejected { failed } = outcome {
            tracing::debug!("Submit blocked by {failed} field(s)");
        }
        outcome
    }
}
