//! Outbound email transports.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::server::error::mail::MailError;

/// Sends a single HTML email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Delivers mail through an HTTP relay that accepts `{from, to, subject, html}` JSON.
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    from: String,
}

impl HttpMailer {
    /// Creates a relay mailer.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `endpoint` - Relay URL the message is POSTed to
    /// - `api_key` - Optional bearer token for the relay
    /// - `from` - Sender address, e.g. `Car Rental <no-reply@example.com>`
    pub fn new(client: reqwest::Client, endpoint: Url, api_key: Option<String>, from: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            from,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let mut request = self.client.post(self.endpoint.clone()).json(&RelayMessage {
            from: &self.from,
            to,
            subject,
            html: html_body,
        });

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Writes messages to the log instead of sending them.
///
/// Used when no relay is configured, typically in development.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, "Mail relay not configured, logging email instead");
        tracing::debug!("{}", html_body);
        Ok(())
    }
}
