//! Contact form state and the validation dispatcher

use super::field::{FieldId, FieldStatus, FormField};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Text shown in the success banner after an accepted submission
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
}

/// Something that happened to the form that may require validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left the field
    Blur(FieldId),
    /// The field's value was edited
    Input(FieldId),
    /// The user asked to send the form
    Submit,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSubmissionResult {
    pub valid: bool,
    pub errors: BTreeMap<FieldId, String>,
}

impl FormSubmissionResult {
    /// First failing field in display order
    pub fn first_error(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }
}

/// Values accepted by a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the dispatcher did in response to a [`FormEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Nothing was validated
    Unchanged,
    /// A single field was validated and now has this status
    Validated { field: FieldId, status: FieldStatus },
    /// Submission aborted; focus belongs on `first_error`
    Rejected {
        first_error: FieldId,
        result: FormSubmissionResult,
    },
    /// Submission accepted; the form has been reset
    Accepted(ContactSubmission),
}

/// Transient confirmation shown after an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessBanner {
    pub shown_at: Instant,
}

impl SuccessBanner {
    /// How long the banner stays up
    pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);

    pub fn new(shown_at: Instant) -> Self {
        Self { shown_at }
    }

    pub fn text(&self) -> &'static str {
        SUCCESS_MESSAGE
    }

    /// When this banner's hide timer fires
    pub fn hide_at(&self) -> Instant {
        self.shown_at + Self::VISIBLE_FOR
    }
}

/// Contact form: name, email, message and a submit button
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    /// 0..=2 are the input fields, 3 is the submit button
    pub active_field_index: usize,
    pub banner: Option<SuccessBanner>,
    /// Hide timers from every accepted submission; none is ever cancelled
    hide_deadlines: Vec<Instant>,
}

impl ContactForm {
    /// Index of the submit button in the focus order
    pub const SUBMIT_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldId::Name),
            email: FormField::new(FieldId::Email),
            message: FormField::new(FieldId::Message),
            active_field_index: 0,
            banner: None,
            hide_deadlines: Vec::new(),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Focus index of a field
    pub fn index_of(id: FieldId) -> usize {
        match id {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Message => 2,
        }
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field()).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field() == Self::SUBMIT_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_id().is_some_and(|id| id.is_multiline())
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }

    /// Route an event to the validation it triggers
    pub fn dispatch(&mut self, event: FormEvent, now: Instant) -> FormOutcome {
        match event {
            FormEvent::Blur(id) => self.on_blur(id),
            FormEvent::Input(id) => self.on_input(id),
            FormEvent::Submit => self.on_submit(now),
        }
    }

    fn on_blur(&mut self, id: FieldId) -> FormOutcome {
        let field = self.field_mut(id);
        match field.check() {
            Ok(()) => field.clear_error(),
            Err(error) => field.set_error(error),
        }
        FormOutcome::Validated {
            field: id,
            status: field.status(),
        }
    }

    fn on_input(&mut self, id: FieldId) -> FormOutcome {
        let field = self.field_mut(id);
        // No live validation until the field has failed once
        if !field.is_errored() {
            return FormOutcome::Unchanged;
        }
        if field.check().is_ok() {
            field.clear_error();
        }
        FormOutcome::Validated {
            field: id,
            status: field.status(),
        }
    }

    fn on_submit(&mut self, now: Instant) -> FormOutcome {
        for id in FieldId::ALL {
            self.field_mut(id).clear_error();
        }
        self.banner = None;

        let mut result = FormSubmissionResult::default();
        for id in FieldId::ALL {
            let field = self.field_mut(id);
            if let Err(error) = field.check() {
                result.errors.insert(id, error.to_string());
                field.set_error(error);
            }
        }
        result.valid = result.errors.is_empty();

        if let Some(first_error) = result.first_error() {
            self.active_field_index = Self::index_of(first_error);
            return FormOutcome::Rejected {
                first_error,
                result,
            };
        }

        let submission = ContactSubmission {
            name: self.name.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            message: self.message.trimmed().to_string(),
        };
        self.reset();
        let banner = SuccessBanner::new(now);
        self.hide_deadlines.push(banner.hide_at());
        self.banner = Some(banner);
        FormOutcome::Accepted(submission)
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char, now: Instant) -> FormOutcome {
        let Some(id) = self.active_field_id() else {
            return FormOutcome::Unchanged;
        };
        self.field_mut(id).push_char(c);
        self.dispatch(FormEvent::Input(id), now)
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self, now: Instant) -> FormOutcome {
        let Some(id) = self.active_field_id() else {
            return FormOutcome::Unchanged;
        };
        self.field_mut(id).pop_char();
        self.dispatch(FormEvent::Input(id), now)
    }

    /// Move focus to `index`, blurring the field being left
    pub fn focus(&mut self, index: usize, now: Instant) -> FormOutcome {
        let index = index.min(Self::SUBMIT_INDEX);
        if index == self.active_field_index {
            return FormOutcome::Unchanged;
        }
        let outcome = self.blur_active(now);
        self.set_active_field(index);
        outcome
    }

    /// Blur the active field without moving focus elsewhere in the form
    pub fn blur_active(&mut self, now: Instant) -> FormOutcome {
        match self.active_field_id() {
            Some(id) => self.dispatch(FormEvent::Blur(id), now),
            None => FormOutcome::Unchanged,
        }
    }

    pub fn focus_next(&mut self, now: Instant) -> FormOutcome {
        let next = (self.active_field_index + 1) % self.field_count();
        self.focus(next, now)
    }

    pub fn focus_prev(&mut self, now: Instant) -> FormOutcome {
        let count = self.field_count();
        let prev = (self.active_field_index + count - 1) % count;
        self.focus(prev, now)
    }

    /// Fire any hide timers that are due
    ///
    /// Each accepted submission schedules its own timer, so an earlier timer
    /// can hide a banner shown by a later submission.
    pub fn tick(&mut self, now: Instant) {
        let pending = self.hide_deadlines.len();
        self.hide_deadlines.retain(|deadline| *deadline > now);
        if self.hide_deadlines.len() < pending && self.banner.take().is_some() {
            tracing::debug!("hiding contact form success banner");
        }
    }

    /// Whether any hide timer is still waiting to fire
    #[cfg(test)]
    pub fn has_pending_timers(&self) -> bool {
        !self.hide_deadlines.is_empty()
    }

    /// Clear every field back to the clean state
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
