use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use thiserror::Error;
use tracing::instrument;

use crate::contact::ContactSubmission;

use super::http_client;

pub const SUBMISSIONS_TABLE: &str = "contact_submissions";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store rejected insert with status {status}")]
    Rejected { status: u16 },
    #[error("store request failed: {0}")]
    Transport(String),
}

/// Durable home of contact submissions. Insert-only.
#[async_trait]
pub trait SubmissionStore: Send + Sync + 'static {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
}

/// Inserts rows through a PostgREST-style `/rest/v1/<table>` endpoint.
pub struct RestStore {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, service_key: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: format!(
                "{}/rest/v1/{SUBMISSIONS_TABLE}",
                base_url.trim_end_matches('/')
            ),
            service_key: service_key.into(),
        })
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let key = HeaderValue::from_str(&self.service_key)
            .map_err(|e| StoreError::Transport(format!("invalid service key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.service_key))
            .map_err(|e| StoreError::Transport(format!("invalid service key: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

#[async_trait]
impl SubmissionStore for RestStore {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .headers(self.headers()?)
            .json(submission)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
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
    fn test_endpoint() {
        let store = RestStore::new("https://proj.supabase.co/", "key").expect("store");
        assert_eq!(
            store.endpoint,
            "https://proj.supabase.co/rest/v1/contact_submissions"
        );
    }

    #[test]
    fn test_headers() {
        let store = RestStore::new("https://proj.supabase.co", "service-key").expect("store");
        let headers = store.headers().expect("headers");
        assert_eq!(headers["apikey"], "service-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer service-key");

        let store = RestStore::new("https://proj.supabase.co", "bad\nkey").expect("store");
        assert!(matches!(store.headers(), Err(StoreError::Transport(_))));
    }
}
