use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Which outbound fetch strategy serves `/top` and `/fetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Plain HTTP client with a browser-like User-Agent.
    Direct,
    /// Full headless Chrome navigation, for upstreams behind bot detection.
    Browser,
}

impl FromStr for FetchStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(FetchStrategy::Direct),
            "browser" => Ok(FetchStrategy::Browser),
            other => Err(AppError::Internal(format!(
                "Invalid FETCH_STRATEGY '{}' (expected 'direct' or 'browser')",
                other
            ))),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub fetch_strategy: FetchStrategy,
    pub top_url: String,
}

pub const DEFAULT_TOP_URL: &str = "https://api.comick.io/top";

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Internal(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Internal(format!("Invalid host address: {}", e)))?;

        let fetch_strategy = match env::var("FETCH_STRATEGY") {
            Ok(value) => value.parse()?,
            Err(_) => FetchStrategy::Direct,
        };

        let top_url = env::var("COMICK_TOP_URL").unwrap_or_else(|_| DEFAULT_TOP_URL.to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            fetch_strategy,
            top_url,
        })
    }
}
