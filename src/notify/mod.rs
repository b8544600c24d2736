pub mod messages;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::MailSettings;

const IMPLICIT_TLS_PORT: u16 = 465;

/// A plain-text notification addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox address `{0}`")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail seam shared by every handler that notifies someone.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Mailbox that receives operator notifications such as feedback.
    fn operator_address(&self) -> &str;

    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Pooled SMTP client. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    sender_address: String,
}

impl SmtpMailer {
    pub fn from_settings(settings: &MailSettings) -> Result<Self, MailError> {
        let builder = if settings.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        let sender = parse_mailbox(&settings.username)?;

        Ok(Self {
            transport,
            sender,
            sender_address: settings.username.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn operator_address(&self) -> &str {
        &self.sender_address
    }

    async fn send(&self, email: Email) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport.send(message).await?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}
