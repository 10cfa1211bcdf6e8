//! The outbound mail seam and its SMTP implementation.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::MailConfig;

/// A rendered email, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(String),

    #[error("mail transport error: {0}")]
    Transport(String),
}

/// Delivery seam. The HTTP layer depends on this trait so tests can record
/// sends instead of talking SMTP.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// SMTP delivery via lettre.
///
/// Configuration is re-read from the environment on every send, matching the
/// original site's per-request transporter.
#[derive(Debug, Default)]
pub struct SmtpMailer;

impl SmtpMailer {
    pub fn new() -> Self {
        Self
    }

    fn transport(config: &MailConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| MailError::Transport(e.to_string()))?
        .port(config.port);

        let builder = match (&config.user, &config.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(builder.build())
    }

    fn build_message(from: &str, email: &OutboundEmail) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(from)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        builder
            .body(email.html_body.clone())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}

fn parse_mailbox(addr: &str) -> Result<lettre::message::Mailbox, MailError> {
    addr.parse()
        .map_err(|_| MailError::Address(addr.to_owned()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let config = MailConfig::from_env();
        let message = Self::build_message(&config.from, email)?;
        let transport = Self::transport(&config)?;

        transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "amal@example.com".into(),
            reply_to: None,
            subject: "New Quote Request: Gate Valve".into(),
            html_body: "<p>hello</p>".into(),
        }
    }

    #[test]
    fn builds_a_message_with_reply_to() {
        let mut e = email();
        e.reply_to = Some("customer@example.com".into());
        let msg = SmtpMailer::build_message("no-reply@sudood.com", &e).unwrap();
        let headers = String::from_utf8(msg.formatted()).unwrap();
        assert!(headers.contains("Reply-To: customer@example.com"));
        assert!(headers.contains("To: amal@example.com"));
    }

    #[test]
    fn invalid_recipient_is_an_address_error() {
        let mut e = email();
        e.to = "not an address".into();
        let err = SmtpMailer::build_message("no-reply@sudood.com", &e).unwrap_err();
        assert!(matches!(err, MailError::Address(_)));
    }
}
