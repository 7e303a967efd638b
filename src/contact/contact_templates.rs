use crate::configuration::Settings;
use crate::contact::contact_form_data::Submission;
use crate::contact::contact_message_format::message_lines;
use crate::email_client::OutboundEmail;
use askama::Template;

pub const CONFIRMATION_SUBJECT: &str = "Thanks for reaching out!";

/// The fixed parts of both emails: who sends them, who gets notified and
/// where the confirmation links back to.
#[derive(Debug, Clone)]
pub struct ContactIdentity {
    /// `Display Name <address>` used as the sender of both emails.
    pub sender: String,
    pub notification_recipient: String,
    pub site_url: String,
    pub owner_name: String,
}

impl ContactIdentity {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sender: format!(
                "{} <{}>",
                settings.site.business_name, settings.email.sender_email
            ),
            notification_recipient: settings.email.notification_recipient.clone(),
            site_url: settings.site.url.clone(),
            owner_name: settings.site.owner_name.clone(),
        }
    }

    /// The site URL without scheme or trailing slash, as shown in link text.
    pub fn site_label(&self) -> &str {
        let url = self.site_url.as_str();
        let url = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        url.trim_end_matches('/')
    }
}

#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct NotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    event_type: &'a str,
    event_date: &'a str,
    // Escaped line by line, joined with <br> in the template
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/contact-confirmation.html")]
struct ConfirmationTemplate<'a> {
    name: &'a str,
    site_url: &'a str,
    site_label: &'a str,
    owner_name: &'a str,
}

/// Email to the business owner announcing a new inquiry. Replies go straight
/// to the submitter.
pub fn notification_email(
    submission: &Submission,
    identity: &ContactIdentity,
) -> Result<OutboundEmail, askama::Error> {
    let html = NotificationTemplate {
        name: submission.name.as_ref(),
        email: submission.email.as_ref(),
        event_type: submission.resolved_event_type(),
        event_date: submission.event_date_or_default(),
        message_lines: message_lines(submission.message.as_ref()),
    }
    .render()?;
    Ok(OutboundEmail {
        from: identity.sender.clone(),
        to: vec![identity.notification_recipient.clone()],
        reply_to: Some(submission.email.to_string()),
        subject: format!("New inquiry from {}", submission.name),
        html,
    })
}

/// Acknowledgment sent back to the submitter.
pub fn confirmation_email(
    submission: &Submission,
    identity: &ContactIdentity,
) -> Result<OutboundEmail, askama::Error> {
    let html = ConfirmationTemplate {
        name: submission.name.as_ref(),
        site_url: &identity.site_url,
        site_label: identity.site_label(),
        owner_name: &identity.owner_name,
    }
    .render()?;
    Ok(OutboundEmail {
        from: identity.sender.clone(),
        to: vec![submission.email.to_string()],
        reply_to: None,
        subject: CONFIRMATION_SUBJECT.to_owned(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::{confirmation_email, notification_email, ContactIdentity, CONFIRMATION_SUBJECT};
    use crate::contact::contact_form_data::{ContactFormData, Submission};
    use std::convert::TryFrom;

    fn identity() -> ContactIdentity {
        ContactIdentity {
            sender: "Simon Wickes Photography <onboarding@resend.dev>".to_owned(),
            notification_recipient: "owner@example.com".to_owned(),
            site_url: "https://simonwickes.com/".to_owned(),
            owner_name: "Simon Wickes".to_owned(),
        }
    }

    fn submission(form: ContactFormData) -> Submission {
        Submission::try_from(form).expect("Test form should be valid")
    }

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            message: "Hello Simon,\nwe would love a shoot.".to_owned(),
            event_type: Some("wedding".to_owned()),
            ..ContactFormData::default()
        }
    }

    #[test]
    fn notification_goes_to_owner_with_reply_to_submitter() {
        let email = notification_email(&submission(form()), &identity()).unwrap();
        assert_eq!(email.from, "Simon Wickes Photography <onboarding@resend.dev>");
        assert_eq!(email.to, vec!["owner@example.com".to_owned()]);
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(email.subject, "New inquiry from Jane Doe");
    }

    #[test]
    fn notification_body_lists_every_field() {
        let email = notification_email(&submission(form()), &identity()).unwrap();
        assert!(email.html.contains("<strong>Name:</strong> Jane Doe"));
        assert!(email
            .html
            .contains(r#"<a href="mailto:jane@example.com">jane@example.com</a>"#));
        assert!(email.html.contains("<strong>Event Type:</strong> wedding"));
        assert!(email.html.contains("<strong>Event Date:</strong> Not specified"));
        assert!(email.html.contains("Hello Simon,<br>we would love a shoot."));
    }

    #[test]
    fn notification_body_escapes_submitter_markup() {
        let form = ContactFormData {
            name: "<script>alert(1)</script>".to_owned(),
            message: "<img src=x onerror=alert(1)>\nsecond line".to_owned(),
            event_type: Some("other".to_owned()),
            event_type_other: Some("<b>party</b>".to_owned()),
            event_date: Some("<i>soon</i>".to_owned()),
            ..form()
        };
        let email = notification_email(&submission(form), &identity()).unwrap();
        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<img"));
        assert!(!email.html.contains("<b>party"));
        assert!(!email.html.contains("<i>soon"));
        assert!(email
            .html
            .contains("<strong>Name:</strong> &#60;script&#62;alert(1)&#60;/script&#62;"));
        assert!(email.html.contains("<strong>Event Type:</strong> &#60;b&#62;party&#60;/b&#62;"));
        assert!(email.html.contains("<strong>Event Date:</strong> &#60;i&#62;soon&#60;/i&#62;"));
        assert!(email
            .html
            .contains("&#60;img src=x onerror=alert(1)&#62;<br>second line"));
    }

    #[test]
    fn notification_message_lines_are_separated_by_line_breaks() {
        let form = ContactFormData {
            message: "Tom & Jerry\r\nwedding\n\nthanks".to_owned(),
            ..form()
        };
        let email = notification_email(&submission(form), &identity()).unwrap();
        assert!(email.html.contains("Tom &#38; Jerry<br>wedding<br><br>thanks</p>"));
    }

    #[test]
    fn confirmation_goes_to_submitter_with_fixed_subject() {
        let email = confirmation_email(&submission(form()), &identity()).unwrap();
        assert_eq!(email.to, vec!["jane@example.com".to_owned()]);
        assert_eq!(email.reply_to, None);
        assert_eq!(email.subject, CONFIRMATION_SUBJECT);
        assert!(email.html.contains("Hi Jane Doe,"));
        assert!(email.html.contains(r#"<a href="https://simonwickes.com/""#));
        assert!(email.html.contains(">simonwickes.com</a>"));
        assert!(email.html.contains("Simon Wickes"));
    }

    #[test]
    fn site_label_strips_scheme_and_slash() {
        let mut identity = identity();
        assert_eq!(identity.site_label(), "simonwickes.com");
        identity.site_url = "http://localhost:4321".to_owned();
        assert_eq!(identity.site_label(), "localhost:4321");
    }
}
