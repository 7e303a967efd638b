#![no_main]
extern crate contact_rs;

use contact_rs::contact::{
    format_message, resolve_event_type, ContactFormData, Submission,
    MESSAGE_MIN_CHARACTERS,
};
use libfuzzer_sys::fuzz_target;
use std::convert::TryFrom;

fuzz_target!(|fields: (String, String, String, Option<String>, Option<String>)| {
    let (name, email, message, event_type, event_type_other) = fields;
    let form = ContactFormData {
        name,
        email,
        message,
        event_type,
        event_type_other,
        event_date: None,
    };
    if let Ok(submission) = Submission::try_from(form) {
        assert!(!submission.name.as_ref().is_empty());
        assert!(submission.email.as_ref().contains('@'));
        assert!(submission.message.as_ref().chars().count() >= MESSAGE_MIN_CHARACTERS);
        let resolved = resolve_event_type(
            submission.event_type.as_deref(),
            submission.event_type_other.as_deref(),
        );
        assert!(!resolved.is_empty());
        let formatted = format_message(submission.message.as_ref());
        assert!(!formatted.contains('\n') && !formatted.contains('\r'));
    }
});
