use crate::censoredstring::CensoredString;
use std::time::Duration;

/// One fully rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailSendError {
    #[error("Email API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Invalid email address '{address}'")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("Failed to build email message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Outbound email transport shared by all requests.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailSendError>;

    /// Short transport name reported by the healthcheck.
    fn provider(&self) -> &'static str;
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Client for the Resend HTTP API (`POST /emails`).
#[derive(Debug, Clone)]
pub struct ResendEmailClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: CensoredString,
}

impl ResendEmailClient {
    pub fn new(
        base_url: String,
        api_key: CensoredString,
        timeout: Duration,
    ) -> Result<Self, EmailSendError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl EmailSender for ResendEmailClient {
    #[tracing::instrument(
        name = "Sending email through Resend",
        skip(self, email),
        fields(subject = %email.subject)
    )]
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailSendError> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.as_ref())
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailSendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::debug!("Resend accepted the message with status {}", status);
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "resend"
    }
}
