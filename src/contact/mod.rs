mod contact_dispatch;
mod contact_event_type;
mod contact_filtered_email;
mod contact_filtered_message;
mod contact_filtered_name;
mod contact_form_data;
mod contact_message_format;
mod contact_templates;
mod contact_validation_error;

pub use contact_dispatch::{
    ConfirmationDispatchError, ConfirmationStatus, ContactDispatcher, ContactError,
    DispatchError, DispatchReport,
};
pub use contact_event_type::{resolve_event_type, NOT_SPECIFIED, OTHER_EVENT_TYPE};
pub use contact_filtered_email::ContactFilteredEmail;
pub use contact_filtered_message::{ContactFilteredMessage, MESSAGE_MIN_CHARACTERS};
pub use contact_filtered_name::ContactFilteredName;
pub use contact_form_data::{ContactFormData, Submission};
pub use contact_message_format::{format_message, message_lines, LINE_BREAK_TAG};
pub use contact_templates::{
    confirmation_email, notification_email, ContactIdentity, CONFIRMATION_SUBJECT,
};
pub use contact_validation_error::{
    ContactField, ValidationError, EMAIL_INVALID_MESSAGE, MESSAGE_TOO_SHORT_MESSAGE,
    NAME_REQUIRED_MESSAGE,
};
