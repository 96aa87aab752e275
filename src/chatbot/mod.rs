//! Chatbot controller seam
//!
//! `POST /chatbot` owns no logic: it hands the raw request to whichever
//! [`ChatBotController`] the server was started with and returns that
//! controller's response untouched. Two controllers ship with the server:
//!
//! - [`UpstreamChatBot`] forwards the request body to an external chatbot
//!   service over HTTP.
//! - [`UnconfiguredChatBot`] answers `503` when no service is configured.

use crate::types::{AppError, Result};
use crate::utils::config::StudyHubConfig;
use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Request,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Handles a chatbot request end to end.
///
/// Implementations receive the request exactly as the client sent it and
/// are responsible for their own validation and error responses.
#[async_trait]
pub trait ChatBotController: Send + Sync {
    async fn handle(&self, req: Request) -> Response;
}

/// Build the controller described by the configuration
pub fn controller_from_config(config: &StudyHubConfig) -> Result<Arc<dyn ChatBotController>> {
    let upstream = config
        .chatbot_upstream_url()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match upstream {
        Some(url) => Ok(Arc::new(UpstreamChatBot::new(
            url,
            Duration::from_secs(config.chatbot.timeout_secs),
            config.chatbot.max_body_bytes,
        )?)),
        None => Ok(Arc::new(UnconfiguredChatBot)),
    }
}

// ============= Upstream Service =============

/// Forwards chatbot requests to an external HTTP service.
pub struct UpstreamChatBot {
    client: reqwest::Client,
    url: String,
    max_body_bytes: usize,
}

impl UpstreamChatBot {
    pub fn new(url: impl Into<String>, timeout: Duration, max_body_bytes: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            max_body_bytes,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn forward(&self, req: Request) -> Result<Response> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, self.max_body_bytes)
            .await
            .map_err(|e| AppError::InvalidInput(format!("Request body rejected: {}", e)))?;

        let mut upstream = self.client.post(&self.url).body(bytes);
        for name in [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT] {
            if let Some(value) = parts.headers.get(&name) {
                upstream = upstream.header(name.as_str(), value.as_bytes());
            }
        }

        debug!(url = %self.url, "Forwarding chatbot request");

        let resp = upstream.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Upstream("Chatbot service timed out".to_string())
            } else {
                AppError::Upstream(format!("Chatbot service unreachable: {}", e))
            }
        })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .map(|v| v.as_bytes().to_vec());
        let body = resp
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read chatbot response: {}", e)))?;

        let mut builder = Response::builder().status(status);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        builder
            .body(Body::from(body))
            .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
    }
}

#[async_trait]
impl ChatBotController for UpstreamChatBot {
    async fn handle(&self, req: Request) -> Response {
        match self.forward(req).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Chatbot request failed");
                e.into_response()
            }
        }
    }
}

// ============= Not Configured =============

/// Stands in when the server has no chatbot service.
pub struct UnconfiguredChatBot;

#[async_trait]
impl ChatBotController for UnconfiguredChatBot {
    async fn handle(&self, _req: Request) -> Response {
        AppError::Unavailable("Chatbot is not configured".to_string()).into_response()
    }
}
