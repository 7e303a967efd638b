use crate::contact::contact_form_data::{ContactFormData, Submission};
use crate::contact::contact_templates::{confirmation_email, notification_email, ContactIdentity};
use crate::contact::contact_validation_error::ValidationError;
use crate::email_client::{EmailSendError, EmailSender};
use std::convert::TryFrom;
use std::sync::Arc;

/// Why one of the two emails could not go out.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to render email template: {0}")]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Send(#[from] EmailSendError),
}

/// Errors that reach the caller of a contact submission.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to send notification email")]
    NotificationDispatch(#[source] DispatchError),
}

/// The confirmation email failed. Recorded, never returned as an error.
#[derive(Debug, thiserror::Error)]
#[error("Failed to send confirmation email")]
pub struct ConfirmationDispatchError(#[source] pub DispatchError);

#[derive(Debug)]
pub enum ConfirmationStatus {
    Sent,
    Failed(ConfirmationDispatchError),
}

/// Outcome of a submission whose notification email went out.
#[derive(Debug)]
pub struct DispatchReport {
    pub confirmation: ConfirmationStatus,
}

impl DispatchReport {
    pub fn confirmation_sent(&self) -> bool {
        matches!(self.confirmation, ConfirmationStatus::Sent)
    }
}

/// Sends the owner notification and then the submitter confirmation for each
/// submission.
///
/// The notification is the only success criterion: if it fails the
/// submission fails and no confirmation is attempted. A failed confirmation
/// is logged and reported in the [`DispatchReport`] but the submission still
/// succeeds, since the owner already has the inquiry.
#[derive(Clone)]
pub struct ContactDispatcher {
    email_sender: Arc<dyn EmailSender>,
    identity: ContactIdentity,
}

impl ContactDispatcher {
    pub fn new(email_sender: Arc<dyn EmailSender>, identity: ContactIdentity) -> Self {
        Self {
            email_sender,
            identity,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.email_sender.provider()
    }

    /// Validate raw form fields and dispatch them. This is the whole contact
    /// operation; the HTTP route is a thin wrapper around it.
    pub async fn submit(&self, form: ContactFormData) -> Result<DispatchReport, ContactError> {
        let submission = Submission::try_from(form).map_err(|error| {
            tracing::info!("Rejected contact submission on {}: {}", error.field, error);
            error
        })?;
        self.dispatch(&submission).await
    }

    #[tracing::instrument(
        name = "Dispatching contact emails",
        skip(self, submission),
        fields(submitter_email = %submission.email)
    )]
    pub async fn dispatch(&self, submission: &Submission) -> Result<DispatchReport, ContactError> {
        if let Err(error) = self.send_notification(submission).await {
            tracing::error!(
                error.cause_chain = ?error,
                "Failed to send notification email: {}",
                error
            );
            return Err(ContactError::NotificationDispatch(error));
        }
        tracing::info!("Notification email sent");

        let confirmation = match self.send_confirmation(submission).await {
            Ok(()) => {
                tracing::info!("Confirmation email sent");
                ConfirmationStatus::Sent
            }
            Err(error) => {
                tracing::warn!(
                    error.cause_chain = ?error,
                    "Failed to send confirmation email: {}",
                    error
                );
                ConfirmationStatus::Failed(ConfirmationDispatchError(error))
            }
        };
        Ok(DispatchReport { confirmation })
    }

    async fn send_notification(&self, submission: &Submission) -> Result<(), DispatchError> {
        let email = notification_email(submission, &self.identity)?;
        self.email_sender.send(&email).await?;
        Ok(())
    }

    async fn send_confirmation(&self, submission: &Submission) -> Result<(), DispatchError> {
        let email = confirmation_email(submission, &self.identity)?;
        self.email_sender.send(&email).await?;
        Ok(())
    }
}
