use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info};

use super::service::{ContactError, ContactRequest, ContactService};

pub const CONTACT_PATH: &str = "/api/send-contact-email";

const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Mounts the contact endpoint. Every method is accepted; `OPTIONS` is
/// answered as a pre-flight.
pub fn contact_routes<S>(service: ContactService) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(CONTACT_PATH, any(submit_contact))
        .with_state(service)
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingFields | Self::InvalidEmail => {
                info!(reason = %self, "Rejected contact submission");
            }
            Self::Malformed(_) | Self::Internal(_) => {
                error!(error = %self, "Contact submission failed");
            }
        }
        (
            self.status(),
            cors_headers(),
            Json(json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}

/// The body is read without the router's default size limit, so an
/// oversized request still gets the JSON error contract and CORS headers.
pub async fn submit_contact(
    State(service): State<ContactService>,
    method: Method,
    body: Body,
) -> Response {
    info!(%method, "Contact form submission received");

    if method == Method::OPTIONS {
        return (StatusCode::OK, cors_headers(), Body::empty()).into_response();
    }

    let body = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => return ContactError::Malformed(e.to_string()).into_response(),
    };

    let req = match serde_json::from_slice::<ContactRequest>(&body) {
        Ok(r) => r,
        Err(e) => return ContactError::Malformed(e.to_string()).into_response(),
    };

    match service.submit(req).await {
        Ok(()) => (
            StatusCode::OK,
            cors_headers(),
            Json(json!({ "success": true })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
