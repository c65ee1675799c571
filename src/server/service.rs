use std::sync::Arc;

use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::contact::{
    is_valid_email, ContactSubmission, INVALID_EMAIL_MSG, MISSING_FIELDS_MSG, SEND_FAILED_MSG,
};

use super::config::{ConfigError, ContactConfig};
use super::mailer::{Email, MailError, Mailer, ResendMailer};
use super::store::{RestStore, SubmissionStore};

/// Raw request body.
///
/// Fields stay untyped JSON until validation. Absent and `null` fields both
/// land as `None`; `false`, `0` and blank strings count as missing too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl From<ContactSubmission> for ContactRequest {
    fn from(sub: ContactSubmission) -> Self {
        Self {
            name: Some(Value::String(sub.name)),
            email: Some(Value::String(sub.email)),
            message: Some(Value::String(sub.message)),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{}", MISSING_FIELDS_MSG)]
    MissingFields,
    #[error("{}", INVALID_EMAIL_MSG)]
    InvalidEmail,
    #[error("malformed request body: {0}")]
    Malformed(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::Malformed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to show the caller. Only validation failures are specific.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_MSG,
            Self::InvalidEmail => INVALID_EMAIL_MSG,
            Self::Malformed(_) | Self::Internal(_) => SEND_FAILED_MSG,
        }
    }
}

/// Validates, stores and announces contact submissions.
///
/// Holds no per-request state; clones share the same collaborators.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn SubmissionStore>,
    mailer: Arc<dyn Mailer>,
    owner_email: String,
    notify_from: String,
    confirm_from: String,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        mailer: Arc<dyn Mailer>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            store,
            mailer,
            owner_email: owner_email.into(),
            notify_from: super::config::DEFAULT_NOTIFY_FROM.to_string(),
            confirm_from: super::config::DEFAULT_CONFIRM_FROM.to_string(),
        }
    }

    pub fn with_senders(mut self, notify_from: impl Into<String>, confirm_from: impl Into<String>) -> Self {
        self.notify_from = notify_from.into();
        self.confirm_from = confirm_from.into();
        self
    }

    pub fn from_config(conf: &ContactConfig) -> Result<Self, ConfigError> {
        let store = RestStore::new(&conf.store_url, conf.store_service_key.clone())
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        let mailer = ResendMailer::new(&conf.resend_api_base, conf.resend_api_key.clone())
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(
            Self::new(Arc::new(store), Arc::new(mailer), conf.owner_email.clone())
                .with_senders(conf.notify_from.clone(), conf.confirm_from.clone()),
        )
    }

    /// Handles one submission end to end.
    ///
    /// Once validation passes only a transport fault while emailing can
    /// turn the result into an error. Store failures and rejected emails
    /// are logged and otherwise ignored.
    pub async fn submit(&self, req: ContactRequest) -> Result<(), ContactError> {
        let submission = validate(req)?;

        if let Err(e) = self.store.insert(&submission).await {
            warn!(error = %e, "Failed to store contact submission");
        }

        let ContactSubmission {
            name,
            email,
            message,
        } = &submission;

        let notification =
            Email::owner_notification(&self.notify_from, &self.owner_email, name, email, message);
        self.dispatch("owner notification", &notification).await?;

        let confirmation = Email::sender_confirmation(&self.confirm_from, name, email);
        self.dispatch("sender confirmation", &confirmation).await?;

        info!("Contact submission processed");
        Ok(())
    }

    async fn dispatch(&self, kind: &'static str, email: &Email) -> Result<(), ContactError> {
        match self.mailer.send(email).await {
            Ok(()) => Ok(()),
            Err(MailError::Rejected { status }) => {
                warn!(kind, status, "Email service rejected message");
                Ok(())
            }
            Err(e @ MailError::Transport(_)) => Err(ContactError::Internal(format!("{kind}: {e}"))),
        }
    }
}

/// Falsy in the loose sense browsers use: absent, `null`, `false`, `0`, or a
/// string that is blank once trimmed.
fn is_missing(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn into_text(field: &'static str, value: Option<Value>) -> Result<String, ContactError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(ContactError::Malformed(format!(
            "{field} is not a string: {}",
            other.unwrap_or(Value::Null)
        ))),
    }
}

/// Presence is checked on trimmed values; the email shape is checked on the
/// value as received, or on its JSON text when it is not a string. Length
/// caps are left to the form.
fn validate(req: ContactRequest) -> Result<ContactSubmission, ContactError> {
    if is_missing(&req.name) || is_missing(&req.email) || is_missing(&req.message) {
        return Err(ContactError::MissingFields);
    }

    let email_shape_ok = match &req.email {
        Some(Value::String(s)) => is_valid_email(s),
        Some(other) => is_valid_email(&other.to_string()),
        None => false,
    };
    if !email_shape_ok {
        return Err(ContactError::InvalidEmail);
    }

    let name = into_text("name", req.name)?;
    let email = into_text("email", req.email)?;
    let message = into_text("message", req.message)?;

    Ok(ContactSubmission::new(name, email, message).trimmed())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::server::mailer::CONFIRMATION_SUBJECT;
    use crate::server::store::StoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct RecordingStore {
        pub rows: Mutex<Vec<ContactSubmission>>,
        pub fail: bool,
    }

    #[async_trait]
    impl SubmissionStore for RecordingStore {
        async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Transport("connection refused".to_string()));
            }
            self.rows
                .lock()
                .expect("rows lock")
                .push(submission.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingMailer {
        pub sent: Mutex<Vec<Email>>,
        pub failure: Option<MailError>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &Email) -> Result<(), MailError> {
            if let Some(err) = &self.failure {
                return Err(err.clone());
            }
            self.sent.lock().expect("sent lock").push(email.clone());
            Ok(())
        }
    }

    pub(crate) fn service(
        store: RecordingStore,
        mailer: RecordingMailer,
    ) -> (ContactService, Arc<RecordingStore>, Arc<RecordingMailer>) {
        let store = Arc::new(store);
        let mailer = Arc::new(mailer);
        let svc = ContactService::new(store.clone(), mailer.clone(), "owner@example.com");
        (svc, store, mailer)
    }

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactSubmission::new(name, email, message).into()
    }

    #[tokio::test]
    async fn test_happy_path() {
        let (svc, store, mailer) = service(RecordingStore::default(), RecordingMailer::default());
        svc.submit(request(" Jane Doe ", "jane@example.com", "Hello <there> & welcome"))
            .await
            .expect("submit should succeed");

        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jane Doe");
        assert_eq!(rows[0].message, "Hello <there> & welcome");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, vec!["owner@example.com".to_string()]);
        assert!(sent[0].html.contains("Hello &lt;there&gt; &amp; welcome"));
        assert_eq!(sent[1].to, vec!["jane@example.com".to_string()]);
        assert_eq!(sent[1].subject, CONFIRMATION_SUBJECT);
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let (svc, store, mailer) = service(RecordingStore::default(), RecordingMailer::default());
        for req in [
            request("", "jane@example.com", "hi"),
            request("Jane", "   ", "hi"),
            request("Jane", "jane@example.com", "\n\t"),
            ContactRequest::default(),
            ContactRequest {
                name: Some(Value::from("Jane")),
                email: None,
                message: Some(Value::from("hi")),
            },
            ContactRequest {
                name: Some(Value::Bool(false)),
                email: Some(Value::from("jane@example.com")),
                message: Some(Value::from("hi")),
            },
            ContactRequest {
                name: Some(Value::from("Jane")),
                email: Some(Value::from("jane@example.com")),
                message: Some(Value::from(0)),
            },
        ] {
            assert_eq!(svc.submit(req).await, Err(ContactError::MissingFields));
        }
        assert!(store.rows.lock().unwrap().is_empty());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let (svc, _, mailer) = service(RecordingStore::default(), RecordingMailer::default());
        for bad in ["nodomain", "a@b", "@b.com", " jane@example.com"] {
            assert_eq!(
                svc.submit(request("Jane", bad, "hi")).await,
                Err(ContactError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_fields() {
        let (svc, store, _) = service(RecordingStore::default(), RecordingMailer::default());

        let numeric_email = ContactRequest {
            name: Some(Value::from("Jane")),
            email: Some(Value::from(5)),
            message: Some(Value::from("hi")),
        };
        assert_eq!(svc.submit(numeric_email).await, Err(ContactError::InvalidEmail));

        let numeric_name = ContactRequest {
            name: Some(Value::from(5)),
            email: Some(Value::from("jane@example.com")),
            message: Some(Value::from("hi")),
        };
        let err = svc.submit(numeric_name).await.unwrap_err();
        assert!(matches!(err, ContactError::Malformed(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_config_builds_clients() {
        let conf = ContactConfig::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_123".to_string()),
            "CONTACT_EMAIL" => Some("owner@example.com".to_string()),
            "SUPABASE_URL" => Some("https://proj.supabase.co".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("service".to_string()),
            _ => None,
        })
        .expect("config");
        let svc = ContactService::from_config(&conf).expect("clients should build");
        assert_eq!(svc.owner_email, "owner@example.com");
        assert_eq!(svc.notify_from, conf.notify_from);
    }

    #[tokio::test]
    async fn test_server_skips_length_caps() {
        let (svc, store, _) = service(RecordingStore::default(), RecordingMailer::default());
        let long = "x".repeat(6000);
        svc.submit(request(&long, "jane@example.com", &long))
            .await
            .expect("server does not enforce length caps");
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_best_effort() {
        let (svc, _, mailer) = service(
            RecordingStore {
                fail: true,
                ..Default::default()
            },
            RecordingMailer::default(),
        );
        assert_eq!(svc.submit(request("Jane", "jane@example.com", "hi")).await, Ok(()));
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_email_is_best_effort() {
        let (svc, store, _) = service(
            RecordingStore::default(),
            RecordingMailer {
                failure: Some(MailError::Rejected { status: 422 }),
                ..Default::default()
            },
        );
        assert_eq!(svc.submit(request("Jane", "jane@example.com", "hi")).await, Ok(()));
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mail_transport_failure_is_internal() {
        let (svc, store, _) = service(
            RecordingStore::default(),
            RecordingMailer {
                failure: Some(MailError::Transport("dns error".to_string())),
                ..Default::default()
            },
        );
        let err = svc
            .submit(request("Jane", "jane@example.com", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Internal(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), SEND_FAILED_MSG);
        // persistence already happened and is not rolled back
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(ContactError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ContactError::InvalidEmail.public_message(), INVALID_EMAIL_MSG);
        assert_eq!(
            ContactError::Malformed("eof".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ContactError::MissingFields.to_string(), MISSING_FIELDS_MSG);
    }
}
