//! # StudyHub server
//!
//! The HTTP side of the StudyHub storefront. It serves the course catalog
//! categories that populate the navigation menu and routes chatbot requests
//! to a chatbot service.
//!
//! ## Overview
//!
//! StudyHub can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `studyhub-server` binary
//! 2. **As a library** - Mount [`api::routes::create_router`] in your own axum app
//!
//! ### Plugging in a chatbot
//!
//! ```rust,ignore
//! use studyhub::{AppState, ConfigManager, chatbot::ChatBotController};
//! use axum::{extract::Request, response::{IntoResponse, Response}};
//! use std::sync::Arc;
//!
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl ChatBotController for Echo {
//!     async fn handle(&self, req: Request) -> Response {
//!         let body = axum::body::to_bytes(req.into_body(), 4096).await.unwrap_or_default();
//!         body.into_response()
//!     }
//! }
//!
//! let state = AppState {
//!     config_manager: Arc::new(ConfigManager::new("studyhub.toml")?),
//!     chatbot: Arc::new(Echo),
//! };
//! let app = studyhub::api::routes::build_app(state);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST handlers and routes
//! - [`chatbot`] - The chatbot controller seam and the bundled controllers
//! - [`cli`] - Command-line parsing and inspection commands
//! - [`types`] - Shared request/response types and errors
//! - [`utils`] - TOML configuration with hot reload

#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Chatbot controller trait and implementations.
pub mod chatbot;
/// Command-line interface.
pub mod cli;
/// Core types (responses, errors).
pub mod types;
/// Configuration utilities (TOML).
pub mod utils;

// Re-export commonly used types
pub use chatbot::ChatBotController;
pub use types::{AppError, Result};
pub use utils::config::{ConfigManager, StudyHubConfig};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TOML-based configuration with hot-reload support
    pub config_manager: Arc<ConfigManager>,
    /// Controller that owns chatbot request handling
    pub chatbot: Arc<dyn ChatBotController>,
}
