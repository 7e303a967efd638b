use crate::contact::contact_validation_error::{
    ContactField, ValidationError, MESSAGE_TOO_SHORT_MESSAGE,
};
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

pub const MESSAGE_MIN_CHARACTERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredMessage(String);

impl ContactFilteredMessage {
    pub fn new(message: &str) -> Result<Self, ValidationError> {
        Self::parse(message)
    }
    /// Length is counted in characters, not bytes, on the message as typed.
    pub fn parse(message: &str) -> Result<Self, ValidationError> {
        if message.chars().count() < MESSAGE_MIN_CHARACTERS {
            return Err(ValidationError::new(
                ContactField::Message,
                MESSAGE_TOO_SHORT_MESSAGE,
            ));
        }
        Ok(Self(message.to_owned()))
    }
}

impl AsRef<str> for ContactFilteredMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactFilteredMessage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ContactFilteredMessage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
