use crate::contact::contact_event_type::{resolve_event_type, NOT_SPECIFIED};
use crate::contact::contact_filtered_email::ContactFilteredEmail;
use crate::contact::contact_filtered_message::ContactFilteredMessage;
use crate::contact::contact_filtered_name::ContactFilteredName;
use crate::contact::contact_validation_error::ValidationError;
use std::convert::TryFrom;

/// Raw contact form fields as posted by the site. Missing keys decode as
/// empty so that every rejection goes through the same validator.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
    pub event_type: Option<String>,
    pub event_type_other: Option<String>,
    pub event_date: Option<String>,
}

/// One validated inquiry.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: ContactFilteredName,
    pub email: ContactFilteredEmail,
    pub message: ContactFilteredMessage,
    pub event_type: Option<String>,
    pub event_type_other: Option<String>,
    pub event_date: Option<String>,
}

impl Submission {
    pub fn resolved_event_type(&self) -> &str {
        resolve_event_type(
            self.event_type.as_deref(),
            self.event_type_other.as_deref(),
        )
    }

    pub fn event_date_or_default(&self) -> &str {
        self.event_date.as_deref().unwrap_or(NOT_SPECIFIED)
    }
}

// Browsers post empty strings for untouched optional inputs. Anything else is
// kept exactly as typed.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl TryFrom<ContactFormData> for Submission {
    type Error = ValidationError;

    /// Fields are checked in form order and the first violation is reported.
    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactFilteredName::parse(&form.name)?;
        let email = ContactFilteredEmail::parse(&form.email)?;
        let message = ContactFilteredMessage::parse(&form.message)?;
        Ok(Self {
            name,
            email,
            message,
            event_type: non_empty(form.event_type),
            event_type_other: non_empty(form.event_type_other),
            event_date: non_empty(form.event_date),
        })
    }
}
