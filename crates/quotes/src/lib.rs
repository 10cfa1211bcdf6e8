//! Quote-request handling: validation, bilingual HTML email rendering, and
//! outbound delivery over SMTP.
//!
//! Delivery is a thin I/O wrapper by design: one attempt, no retries, no
//! queuing. A failure is surfaced once to the caller.

pub mod config;
pub mod email;
pub mod mailer;
pub mod request;
pub mod sender;

pub use config::MailConfig;
pub use mailer::{MailError, Mailer, OutboundEmail, SmtpMailer};
pub use request::QuoteRequest;
pub use sender::{QuoteError, QuoteSender};
