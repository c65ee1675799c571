use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::contact::escape_html;

use super::http_client;

pub const CONFIRMATION_SUBJECT: &str = "Thanks for reaching out!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("email service rejected message with status {status}")]
    Rejected { status: u16 },
    #[error("email request failed: {0}")]
    Transport(String),
}

/// One outbound transactional email, in the shape the email API accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl Email {
    /// Message to the site owner about a new submission.
    ///
    /// Name and message are escaped here; the email address was already
    /// shape-checked and is embedded as-is.
    pub fn owner_notification(from: &str, owner: &str, name: &str, email: &str, message: &str) -> Self {
        let safe_name = escape_html(name);
        let safe_message = escape_html(message).replace('\n', "<br>");
        Self {
            from: from.to_string(),
            to: vec![owner.to_string()],
            subject: format!("New Contact from {safe_name}"),
            html: format!(
                "<h1>New Message</h1><p><strong>From:</strong> {safe_name} ({email})</p><p>{safe_message}</p>"
            ),
        }
    }

    /// Acknowledgement sent back to whoever filled in the form.
    pub fn sender_confirmation(from: &str, name: &str, email: &str) -> Self {
        let safe_name = escape_html(name);
        Self {
            from: from.to_string(),
            to: vec![email.to_string()],
            subject: CONFIRMATION_SUBJECT.to_string(),
            html: format!(
                "<h1>Hi {safe_name}!</h1><p>Thanks for your message! I'll get back to you soon.</p>"
            ),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// Sends through a Resend-compatible `POST /emails` API.
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_base: &str, api_key: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: format!("{}/emails", api_base.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[instrument(skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MailError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_notification() {
        let email = Email::owner_notification(
            "Contact Form <onboarding@resend.dev>",
            "owner@example.com",
            "Jane <b>Doe</b>",
            "jane@example.com",
            "Hello <there> & welcome\nsecond line",
        );
        assert_eq!(email.to, vec!["owner@example.com".to_string()]);
        assert_eq!(email.subject, "New Contact from Jane &lt;b&gt;Doe&lt;/b&gt;");
        assert!(email.html.contains("Hello &lt;there&gt; &amp; welcome<br>second line"));
        assert!(email.html.contains("(jane@example.com)"));
        assert!(!email.html.contains("<there>"));
    }

    #[test]
    fn test_sender_confirmation() {
        let email = Email::sender_confirmation("Portfolio <onboarding@resend.dev>", "A&B", "ab@example.com");
        assert_eq!(email.to, vec!["ab@example.com".to_string()]);
        assert_eq!(email.subject, CONFIRMATION_SUBJECT);
        assert!(email.html.starts_with("<h1>Hi A&amp;B!</h1>"));
    }

    #[test]
    fn test_wire_shape() {
        let email = Email::sender_confirmation("f", "n", "e@x.io");
        let json = serde_json::to_value(&email).expect("serialize");
        assert_eq!(json["from"], "f");
        assert_eq!(json["to"][0], "e@x.io");
        assert!(json["html"].is_string());
        let mailer = ResendMailer::new("https://api.resend.com/", "k").expect("mailer");
        assert_eq!(mailer.endpoint, "https://api.resend.com/emails");
    }
}
