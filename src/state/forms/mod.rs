//! Form domain layer
//!
//! Type-safe form handling for the RSVP section.

mod field;
mod rsvp_form;

pub use field::{FieldValue, FormField};
pub use rsvp_form::{Form, Receipt, RsvpForm, RsvpRequest, SUBMIT_ROW};
