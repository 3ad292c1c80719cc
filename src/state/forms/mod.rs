//! Form domain layer
//!
//! Validation is kept free of rendering: the contact form owns its field
//! values and errors, and the UI only reads them.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, FieldStatus, FormField};
pub use form_state::{
    ContactForm, ContactSubmission, Form, FormEvent, FormOutcome, FormSubmissionResult,
    SuccessBanner, SUCCESS_MESSAGE,
};
pub use validation::{
    validate_email, validate_message, validate_name, EmailError, FieldError, MessageError,
    NameError, ValidationKind,
};
