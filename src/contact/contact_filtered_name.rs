use crate::contact::contact_validation_error::{ContactField, ValidationError, NAME_REQUIRED_MESSAGE};
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredName(String);

impl ContactFilteredName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::parse(name)
    }
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            tracing::debug!("Rejected empty name");
            return Err(ValidationError::new(ContactField::Name, NAME_REQUIRED_MESSAGE));
        }
        Ok(Self(name.to_owned()))
    }
}

impl AsRef<str> for ContactFilteredName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactFilteredName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ContactFilteredName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
