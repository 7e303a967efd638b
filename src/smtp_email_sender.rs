use crate::configuration::SmtpSettings;
use crate::email_client::{EmailSendError, EmailSender, OutboundEmail};
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

pub struct SmtpEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    pub fn new(settings: &SmtpSettings, timeout: Duration) -> Result<Self, EmailSendError> {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.as_ref().to_owned(),
        );
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(timeout))
            .build();
        Ok(Self { mailer })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailSendError> {
    address
        .parse()
        .map_err(|source| EmailSendError::InvalidAddress {
            address: address.to_owned(),
            source,
        })
}

pub fn build_message(email: &OutboundEmail) -> Result<Message, EmailSendError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML);
    for recipient in &email.to {
        builder = builder.to(parse_mailbox(recipient)?);
    }
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to)?);
    }
    Ok(builder.body(email.html.clone())?)
}

#[async_trait::async_trait]
impl EmailSender for SmtpEmailSender {
    #[tracing::instrument(
        name = "Sending email over SMTP",
        skip(self, email),
        fields(subject = %email.subject)
    )]
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailSendError> {
        let message = build_message(email)?;
        let response = self.mailer.send(message).await?;
        tracing::debug!("SMTP relay answered with code {}", response.code());
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "smtp"
    }
}
