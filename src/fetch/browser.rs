use std::ffi::OsStr;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions};
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, Result};

const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a URL by rendering it in a headless Chrome instance.
///
/// Used for upstreams whose bot detection inspects JavaScript execution.
/// Chrome is blocking, so the whole navigation runs on the blocking pool.
pub async fn fetch(url: &str) -> Result<Value> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || render(&url))
        .await
        .map_err(|e| AppError::Internal(format!("Browser task failed: {}", e)))?
}

fn render(url: &str) -> Result<Value> {
    let user_agent_arg = format!("--user-agent={}", super::USER_AGENT);
    let options = LaunchOptions {
        headless: true,
        sandbox: false,
        args: vec![
            OsStr::new("--disable-setuid-sandbox"),
            OsStr::new(&user_agent_arg),
        ],
        ..Default::default()
    };

    // The Browser owns the Chrome process; dropping it on any exit from this
    // function (including the ? paths) tears the process down.
    let browser = Browser::new(options)
        .map_err(|e| AppError::Internal(format!("Failed to launch browser: {}", e)))?;

    let tab = browser
        .new_tab()
        .map_err(|e| AppError::Internal(format!("Failed to open tab: {}", e)))?;
    tab.set_default_timeout(NAVIGATION_TIMEOUT);

    debug!(url, "navigating");
    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| AppError::Internal(format!("Failed to navigate to URL: {}", e)))?;

    let content_type = evaluate_string(&tab, "document.contentType");
    let text = evaluate_string(&tab, "document.body.textContent")
        .ok_or_else(|| AppError::Internal("Page has no text content".to_string()))?;

    super::classify_payload(content_type.as_deref(), text)
}

fn evaluate_string(tab: &headless_chrome::Tab, expression: &str) -> Option<String> {
    tab.evaluate(expression, false)
        .ok()
        .and_then(|object| object.value)
        .and_then(|value| value.as_str().map(str::to_string))
}
