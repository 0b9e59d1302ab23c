//! RSVP form: two text fields, an attendance toggle and the submit button row

use super::field::FormField;
use crate::error::RsvpError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Snapshot of the form handed to a submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRequest {
    pub name: String,
    pub email: String,
    pub attending: bool,
}

impl RsvpRequest {
    /// Presence check on both text fields; no format validation
    pub fn validate(&self) -> Result<(), RsvpError> {
        if self.name.is_empty() {
            return Err(RsvpError::MissingField("Name"));
        }
        if self.email.is_empty() {
            return Err(RsvpError::MissingField("Email"));
        }
        Ok(())
    }
}

/// Acknowledgement of a received RSVP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub attending: bool,
}

impl Receipt {
    pub fn new(attending: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            attending,
        }
    }
}

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 3;

#[derive(Debug, Clone)]
pub struct RsvpForm {
    pub name: FormField,
    pub email: FormField,
    pub attending: FormField,
    pub active_field_index: usize,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Full Name", "Enter your full name"),
            email: FormField::text("email", "Email Address", "Enter your email"),
            attending: FormField::toggle("attending", "Will you attend?", true),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_attending(&self) -> bool {
        self.attending.as_bool()
    }

    /// Label shown next to the attendance toggle
    pub fn attendance_label(&self) -> &'static str {
        if self.is_attending() {
            "Yes, I'll be there!"
        } else {
            "Sorry, I can't make it"
        }
    }

    pub fn to_request(&self) -> RsvpRequest {
        RsvpRequest {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            attending: self.is_attending(),
        }
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RsvpForm {
    fn field_count(&self) -> usize {
        4 // name, email, attending, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.attending),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.attending),
            _ => None,
        }
    }
}
