use crate::contact::contact_validation_error::{ContactField, ValidationError, EMAIL_INVALID_MESSAGE};
use regex::Regex;
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// MDN web docs provide a regular expression matching emails
// https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input/email#validation
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$")
        .expect("static email regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilteredEmail(String);

impl ContactFilteredEmail {
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        Self::parse(email)
    }
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let trimmed_email = email.trim();
        if trimmed_email.is_empty() {
            tracing::debug!("Rejected blank email '{}'", email);
            return Err(ValidationError::new(ContactField::Email, EMAIL_INVALID_MESSAGE));
        }
        if EMAIL_FORMAT.is_match(trimmed_email) {
            Ok(Self(trimmed_email.to_owned()))
        } else {
            tracing::debug!("Rejected email '{}' with invalid formatting", email);
            Err(ValidationError::new(ContactField::Email, EMAIL_INVALID_MESSAGE))
        }
    }
}

impl AsRef<str> for ContactFilteredEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactFilteredEmail {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactFilteredEmail {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
