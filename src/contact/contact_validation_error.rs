use std::fmt;

pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const MESSAGE_TOO_SHORT_MESSAGE: &str = "Please include a message (at least 10 characters)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        };
        f.write_str(field)
    }
}

/// A submitted field that violates its constraint. The message is safe to
/// show to the submitter as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: ContactField,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: ContactField, message: &'static str) -> Self {
        Self { field, message }
    }
}
