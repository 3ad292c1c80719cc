//! Contact form validators
//!
//! Each validator trims its input and runs its checks in a fixed order; the
//! first failing check decides the error. Failures are plain values whose
//! `Display` text is what the form shows under the field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum trimmed length of a name
pub const NAME_MIN_LEN: usize = 2;
/// Minimum trimmed length of a message
pub const MESSAGE_MIN_LEN: usize = 10;
/// Maximum trimmed length of a message
pub const MESSAGE_MAX_LEN: usize = 500;

/// ASCII letters and whitespace only (U+FEFF counts as whitespace)
const NAME_PATTERN: &str = r"^[a-zA-Z\s\x{FEFF}]+$";
/// local@domain.tld with no whitespace or extra `@`
const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

/// Byte order mark, which the browser's trim also strips
const BOM: char = '\u{FEFF}';

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| compile(NAME_PATTERN));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants covered by the tests below
    Regex::new(pattern).expect("validation pattern is valid")
}

/// Failure category shared by all fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    TooShort,
    InvalidFormat,
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name is required")]
    Required,
    #[error("Name must be at least 2 characters long")]
    TooShort,
    #[error("Name can only contain letters and spaces")]
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Message is required")]
    Required,
    #[error("Message must be at least 10 characters long")]
    TooShort,
    #[error("Message must be less than 500 characters")]
    TooLong,
}

/// A validation failure for any contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl FieldError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            FieldError::Name(NameError::Required)
            | FieldError::Email(EmailError::Required)
            | FieldError::Message(MessageError::Required) => ValidationKind::Required,
            FieldError::Name(NameError::TooShort) | FieldError::Message(MessageError::TooShort) => {
                ValidationKind::TooShort
            }
            FieldError::Name(NameError::InvalidFormat)
            | FieldError::Email(EmailError::InvalidFormat) => ValidationKind::InvalidFormat,
            FieldError::Message(MessageError::TooLong) => ValidationKind::TooLong,
        }
    }
}

/// Strip surrounding whitespace and byte order marks
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Validate the sender's name
pub fn validate_name(text: &str) -> Result<(), NameError> {
    let trimmed = trim_input(text);
    if trimmed.is_empty() {
        return Err(NameError::Required);
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Err(NameError::TooShort);
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(NameError::InvalidFormat);
    }
    Ok(())
}

/// Validate the sender's email address
pub fn validate_email(text: &str) -> Result<(), EmailError> {
    let trimmed = trim_input(text);
    if trimmed.is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(EmailError::InvalidFormat);
    }
    Ok(())
}

/// Validate the message body
pub fn validate_message(text: &str) -> Result<(), MessageError> {
    let trimmed = trim_input(text);
    if trimmed.is_empty() {
        return Err(MessageError::Required);
    }
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN_LEN {
        return Err(MessageError::TooShort);
    }
    if len > MESSAGE_MAX_LEN {
        return Err(MessageError::TooLong);
    }
    Ok(())
}
