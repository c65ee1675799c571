use std::future::Future;

use thiserror::Error;

use crate::contact::{
    is_valid_email, ContactSubmission, EMAIL_MAX_LEN, MESSAGE_MAX_LEN, NAME_MAX_LEN,
};

pub const SEND_FALLBACK_MSG: &str = "Please try again later.";

/// Field values held by the contact form before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Name too long")]
    NameTooLong,
    #[error("Email too long")]
    EmailTooLong,
    #[error("Message too long")]
    MessageTooLong,
}

impl FormError {
    pub fn description(&self) -> String {
        match self {
            Self::MissingFields => "Please fill in all fields.".to_string(),
            Self::InvalidEmail => "Please enter a valid email address.".to_string(),
            Self::NameTooLong => format!("Name must be less than {NAME_MAX_LEN} characters."),
            Self::EmailTooLong => format!("Email must be less than {EMAIL_MAX_LEN} characters."),
            Self::MessageTooLong => {
                format!("Message must be less than {MESSAGE_MAX_LEN} characters.")
            }
        }
    }
}

/// What the user is shown once a submit attempt settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success { title: String, description: String },
    Error { title: String, description: String },
}

impl Notice {
    pub fn sent() -> Self {
        Self::Success {
            title: "Message sent! 🚀".to_string(),
            description: "Thanks for reaching out! I'll get back to you soon. Check your email for confirmation.".to_string(),
        }
    }

    pub fn send_failed(reason: Option<String>) -> Self {
        let description = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| SEND_FALLBACK_MSG.to_string());
        Self::Error {
            title: crate::contact::SEND_FAILED_MSG.to_string(),
            description,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } | Self::Error { title, .. } => title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Success { description, .. } | Self::Error { description, .. } => description,
        }
    }
}

impl From<FormError> for Notice {
    fn from(err: FormError) -> Self {
        Self::Error {
            title: err.to_string(),
            description: err.description(),
        }
    }
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks the trimmed fields and returns them ready to send.
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let sub = ContactSubmission::new(&self.name, &self.email, &self.message).trimmed();

        if sub.name.is_empty() || sub.email.is_empty() || sub.message.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&sub.email) {
            return Err(FormError::InvalidEmail);
        }
        if sub.name.chars().count() > NAME_MAX_LEN {
            return Err(FormError::NameTooLong);
        }
        if sub.email.chars().count() > EMAIL_MAX_LEN {
            return Err(FormError::EmailTooLong);
        }
        if sub.message.chars().count() > MESSAGE_MAX_LEN {
            return Err(FormError::MessageTooLong);
        }
        Ok(sub)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Holds the "submitting" state for as long as it is alive.
///
/// The flag is raised on creation and lowered on drop, whichever way the
/// owning scope is left.
pub struct SubmitGuard<F: Fn(bool)> {
    set_submitting: F,
}

impl<F: Fn(bool)> SubmitGuard<F> {
    pub fn acquire(set_submitting: F) -> Self {
        set_submitting(true);
        Self { set_submitting }
    }
}

impl<F: Fn(bool)> Drop for SubmitGuard<F> {
    fn drop(&mut self) {
        (self.set_submitting)(false);
    }
}

/// Starts a submit attempt.
///
/// Validation runs and the submitting flag is raised before anything is
/// awaited, so a second submit in the same tick already sees the flag. An
/// invalid form leaves the flag untouched and comes back as the notice to
/// show.
pub fn begin_submit<F: Fn(bool)>(
    form: &ContactForm,
    set_submitting: F,
) -> Result<(ContactSubmission, SubmitGuard<F>), Notice> {
    let submission = form.validate()?;
    Ok((submission, SubmitGuard::acquire(set_submitting)))
}

/// Finishes an attempt started by [`begin_submit`].
///
/// `send` is called exactly once. An `Err` from it carries the
/// handler-provided message, if any. The flag is lowered before returning.
pub async fn finish_submit<F, S, Fut>(
    submission: ContactSubmission,
    guard: SubmitGuard<F>,
    send: S,
) -> Notice
where
    F: Fn(bool),
    S: FnOnce(ContactSubmission) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let notice = match send(submission).await {
        Ok(()) => Notice::sent(),
        Err(reason) => {
            log::error!("Error sending message: {reason}");
            Notice::send_failed(Some(reason))
        }
    };
    drop(guard);
    notice
}
