//! Form field value objects

use super::validation::{
    trim_input, validate_email, validate_message, validate_name, FieldError,
};
use std::fmt;

/// Identifies one of the contact form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldId::Message)
    }

    /// Run this field's validator over raw input
    pub fn validate(&self, text: &str) -> Result<(), FieldError> {
        match self {
            FieldId::Name => validate_name(text).map_err(FieldError::from),
            FieldId::Email => validate_email(text).map_err(FieldError::from),
            FieldId::Message => validate_message(text).map_err(FieldError::from),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visual validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Clean,
    Errored,
}

/// A single text field with its current value and last validation error
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    error: Option<FieldError>,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
        }
    }

    #[cfg(test)]
    pub fn with_value(id: FieldId, value: &str) -> Self {
        Self {
            id,
            value: value.to_string(),
            error: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.id.is_multiline()
    }

    /// Value with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        trim_input(&self.value)
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Message shown under the field; empty when the field is clean
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn status(&self) -> FieldStatus {
        if self.error.is_some() {
            FieldStatus::Errored
        } else {
            FieldStatus::Clean
        }
    }

    pub fn is_errored(&self) -> bool {
        self.status() == FieldStatus::Errored
    }

    /// Validate the current value and return the verdict without touching state
    pub fn check(&self) -> Result<(), FieldError> {
        self.id.validate(&self.value)
    }

    pub fn set_error(&mut self, error: FieldError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and return to the clean state
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }
}
