pub mod browser;
pub mod direct;

use serde_json::Value;

use crate::config::FetchStrategy;
use crate::error::{AppError, Result};

/// User-Agent presented to upstreams by both strategies. Mimics a desktop
/// Chrome so upstreams that sniff for scripted clients serve real content.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetch a URL with the configured strategy.
///
/// JSON upstream bodies come back as structured values; anything else is
/// forwarded as a JSON string.
pub async fn fetch_url(strategy: FetchStrategy, url: &str) -> Result<Value> {
    match strategy {
        FetchStrategy::Direct => direct::fetch(url).await,
        FetchStrategy::Browser => browser::fetch(url).await,
    }
}

/// Turn a fetched body into the relayed payload based on its declared
/// content type. Non-JSON bodies stay as raw text.
pub(crate) fn classify_payload(content_type: Option<&str>, body: String) -> Result<Value> {
    let is_json = content_type
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&body)
            .map_err(|e| AppError::Internal(format!("Invalid JSON from upstream: {}", e)))
    } else {
        Ok(Value::String(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_content_type_is_parsed() {
        let value = classify_payload(Some("application/json"), r#"{"a":1}"#.to_string()).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn json_content_type_with_charset_is_parsed() {
        let value =
            classify_payload(Some("application/json; charset=utf-8"), "[1,2]".to_string()).unwrap();
        assert_eq!(value, serde_json::json!([1, 2]));
    }

    #[test]
    fn other_content_types_stay_text() {
        let value = classify_payload(Some("text/html"), "<p>hi</p>".to_string()).unwrap();
        assert_eq!(value, Value::String("<p>hi</p>".to_string()));
    }

    #[test]
    fn missing_content_type_stays_text() {
        let value = classify_payload(None, "plain".to_string()).unwrap();
        assert_eq!(value, Value::String("plain".to_string()));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(classify_payload(Some("application/json"), "{nope".to_string()).is_err());
    }

    // The direct client maps a refused connection to UpstreamUnreachable, so
    // an Internal error here proves the browser path handled the request
    // (whether Chrome failed to launch or the navigation itself failed).
    #[tokio::test]
    async fn browser_strategy_failures_are_internal() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_url(FetchStrategy::Browser, &format!("http://{}/", dead_addr))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
