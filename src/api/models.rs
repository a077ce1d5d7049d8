use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct FetchParams {
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

/// Route descriptions shown at `/`, keyed by path.
#[derive(Serialize)]
pub struct Endpoints {
    #[serde(rename = "/top")]
    pub top: String,
    #[serde(rename = "/fetch")]
    pub fetch: String,
    #[serde(rename = "/health")]
    pub health: String,
}
