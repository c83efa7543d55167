//! Outbound email.
//!
//! Services depend on the `Mailer` trait. Production delivers over SMTP; without SMTP
//! settings messages are only logged, and tests record them in memory.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::AppError};

/// File attached to an outgoing email.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A plain-text email with an optional attachment.
#[derive(Debug, Clone)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: Option<EmailAttachment>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), AppError>;
}

/// Delivers email through an authenticated SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the SMTP transport from configuration.
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport configured; no connection is opened yet
    /// - `Err(AppError::SmtpErr)` - Relay host could not be resolved into a transport
    /// - `Err(AppError::AddressErr)` - `SMTP_FROM` is not a valid mailbox
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
        })
    }

    fn build_message(&self, email: Email) -> Result<Message, AppError> {
        let builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse::<Mailbox>()?)
            .subject(email.subject);

        let message = match email.attachment {
            Some(attachment) => {
                let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
                    AppError::InternalError(format!(
                        "Invalid attachment content type '{}': {}",
                        attachment.content_type, e
                    ))
                })?;

                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(SinglePart::plain(email.body))
                        .singlepart(
                            Attachment::new(attachment.file_name)
                                .body(attachment.bytes, content_type),
                        ),
                )?
            }
            None => builder.body(email.body)?,
        };

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: Email) -> Result<(), AppError> {
        let to = email.to.clone();
        let subject = email.subject.clone();
        let message = self.build_message(email)?;

        self.transport.send(message).await?;

        tracing::info!("Sent email '{}' to {}", subject, to);

        Ok(())
    }
}

/// Logs emails instead of sending them. Used when SMTP is not configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), AppError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            attachment = email.attachment.as_ref().map(|a| a.file_name.as_str()),
            "SMTP not configured, email not sent:\n{}",
            email.body
        );
        Ok(())
    }
}

/// Captures sent emails in memory for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingMailer {
    sent: std::sync::Mutex<Vec<Email>>,
    fail: bool,
}

#[cfg(test)]
impl RecordingMailer {
    /// A mailer whose every send fails, for exercising best-effort paths.
    pub fn failing() -> Self {
        Self {
            sent: Default::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::InternalError("mail relay unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
