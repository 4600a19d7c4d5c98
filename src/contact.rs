use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name`/`id` attribute of the form control.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("Couldn't send message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Every field must be present; nothing beyond that is checked.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(ContactError),
}

/// Field values plus the state of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    pub fn shows_notice(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn error(&self) -> Option<&ContactError> {
        match &self.status {
            SubmissionStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Validates the fields and moves to `InFlight`, handing back the
    /// message to deliver. The status is untouched on error.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.fields.validate()?;
        self.status = SubmissionStatus::InFlight;
        Ok(self.fields.clone())
    }

    /// Settles an in-flight submission. Success clears every field; failure
    /// keeps them so the visitor can retry.
    pub fn complete(&mut self, result: Result<(), ContactError>) {
        if !self.is_submitting() {
            log::warn!("Ignoring contact submission result with nothing in flight");
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e);
            }
        }
    }

    /// Hides the success notice. Does nothing unless the notice is showing.
    pub fn dismiss_notice(&mut self) {
        if self.shows_notice() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Where accepted contact messages end up.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Records messages in the server log and nowhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        log::info!(
            "Contact message from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}
