//! Quote delivery: one business notification, one customer acknowledgment.

use std::sync::Arc;

use thiserror::Error;

use crate::config::MailConfig;
use crate::email;
use crate::mailer::{MailError, Mailer, OutboundEmail};
use crate::request::{QuoteRequest, MISSING_FIELDS};

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Required fields missing; carries the canonical wire message.
    #[error("{MISSING_FIELDS}")]
    Invalid,

    /// Delivery failed. Surfaced once to the caller, never retried.
    #[error("{0}")]
    Delivery(String),
}

impl From<MailError> for QuoteError {
    fn from(err: MailError) -> Self {
        QuoteError::Delivery(err.to_string())
    }
}

/// Validates a request, renders both bodies and hands them to the mailer.
#[derive(Clone)]
pub struct QuoteSender {
    mailer: Arc<dyn Mailer>,
}

impl QuoteSender {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Send both emails for a quote request.
    ///
    /// The business notification goes first (reply-to set to the submitter);
    /// the acknowledgment follows. A failure at either step aborts the
    /// submission and is reported once.
    pub async fn send(&self, request: &QuoteRequest) -> Result<(), QuoteError> {
        request.validate().map_err(|_| QuoteError::Invalid)?;

        let config = MailConfig::from_env();

        let business = OutboundEmail {
            to: config.business_to.clone(),
            reply_to: Some(request.email.clone()),
            subject: email::business_subject(request),
            html_body: email::render_business_email(request),
        };
        self.mailer.send(&business).await?;

        let acknowledgment = OutboundEmail {
            to: request.email.clone(),
            reply_to: None,
            subject: email::CUSTOMER_SUBJECT.to_owned(),
            html_body: email::render_customer_email(request),
        };
        self.mailer.send(&acknowledgment).await?;

        tracing::info!(
            customer_email = %request.email,
            product = %request.product_name,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "quote request emails sent"
        );
        Ok(())
    }
}
