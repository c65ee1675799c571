use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;
pub const MESSAGE_MAX_LEN: usize = 5000;

pub const MISSING_FIELDS_MSG: &str = "All fields are required";
pub const INVALID_EMAIL_MSG: &str = "Invalid email format";
pub const SEND_FAILED_MSG: &str = "Failed to send message";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex should compile")
});

/// A single contact form submission.
///
/// Created once per accepted request and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Loose `local@domain.tld` check. Not an RFC 5322 validator.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Escapes `&`, `<` and `>` for embedding untrusted text in HTML.
///
/// `&` goes first so the entities produced for `<` and `>` are never
/// escaped a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
