//! SMTP configuration from the process environment.

/// Outbound mail settings.
///
/// Read from the environment at send time (the original site built its
/// transporter per request), with documented fallback defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS when true, STARTTLS relay otherwise.
    pub secure: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from: String,
    /// Fixed business inbox receiving quote notifications.
    pub business_to: String,
}

impl MailConfig {
    pub fn from_env() -> MailConfig {
        let host = std::env::var("EMAIL_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_owned());
        let port = std::env::var("EMAIL_PORT")
            .ok()
            .and_then(|p| match p.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %p, "EMAIL_PORT is not a valid port; using 587");
                    None
                }
            })
            .unwrap_or(587);
        let secure = std::env::var("EMAIL_SECURE").is_ok_and(|v| v == "true");

        let user = std::env::var("EMAIL_USER").ok().filter(|v| !v.is_empty());
        let password = std::env::var("EMAIL_PASSWORD").ok().filter(|v| !v.is_empty());
        if user.is_none() || password.is_none() {
            tracing::warn!("EMAIL_USER/EMAIL_PASSWORD not set; sending unauthenticated");
        }

        let from = std::env::var("EMAIL_FROM")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| user.clone())
            .unwrap_or_else(|| "no-reply@sudood.com".to_owned());
        let business_to = std::env::var("BUSINESS_EMAIL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "info@sudood.com".to_owned());

        MailConfig {
            host,
            port,
            secure,
            user,
            password,
            from,
            business_to,
        }
    }
}
