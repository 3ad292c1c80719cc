//! Form rendering module
//!
//! - `field_renderer`: field box and error line
//! - `contact_form`: the contact section and its row layout

mod contact_form;
mod field_renderer;

pub use contact_form::{contact_rows, draw_contact};
