pub mod config;
pub mod handler;
pub mod mailer;
pub mod service;
pub mod store;

use std::time::Duration;

pub use config::{ConfigError, ContactConfig};
pub use handler::{contact_routes, CONTACT_PATH};
pub use service::{ContactError, ContactRequest, ContactService};

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared settings for outbound calls. A builder failure (TLS backend
/// unavailable) is returned so startup stops instead of running without the
/// timeout.
pub(crate) fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
