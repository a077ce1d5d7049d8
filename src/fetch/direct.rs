use std::time::Duration;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;

use crate::error::{AppError, Result};

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .user_agent(super::USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetch a URL with a plain HTTP GET.
///
/// Non-2xx upstream statuses are forwarded to the caller; connect and
/// timeout failures collapse to a fixed 503.
pub async fn fetch(url: &str) -> Result<Value> {
    let response = CLIENT.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        // reqwest and axum sit on different http versions, so cross via u16
        let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        return Err(AppError::UpstreamHttp {
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            status,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await?;

    super::classify_payload(content_type.as_deref(), body)
}
