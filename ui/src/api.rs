//! API client for communicating with the StudyHub server

use crate::config::ApiConfig;
use crate::types::{ApiErrorBody, CategoriesEnvelope, Category};
use gloo_net::http::Request;
use std::fmt;

/// Why a request to the server failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    Status { status: u16, message: Option<String> },
    /// The response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "Request failed with status {}: {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "Request failed with status {}", status),
            ApiError::Decode(e) => write!(f, "Failed to parse response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// GET a JSON document
pub async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let message = resp.json::<ApiErrorBody>().await.ok().map(|body| body.error);
        return Err(ApiError::Status { status, message });
    }

    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the catalog categories shown in the navigation menu
pub async fn fetch_categories(config: &ApiConfig) -> Result<Vec<Category>, ApiError> {
    let envelope: CategoriesEnvelope = fetch_json(&config.categories_url()).await?;
    Ok(envelope.data)
}
