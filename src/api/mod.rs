//! HTTP API Handlers and Routes
//!
//! The REST surface of StudyHub, built on the Axum web framework.
//!
//! # API Endpoints
//!
//! ## Catalog (`/api/v1/course`)
//! - `GET /api/v1/course/showAllCategories` - List catalog categories
//!
//! ## Chatbot (`/api/v1/chatbot`)
//! - `POST /api/v1/chatbot` - Delegated to the configured chatbot controller
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! # OpenAPI Documentation
//!
//! The OpenAPI document is served at `/api-docs/openapi.json`. With the
//! `swagger-ui` feature enabled, interactive docs are at `/swagger-ui/`.

use crate::types::{CategoriesResponse, Category};
use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "StudyHub API"),
    paths(
        handlers::categories::show_all_categories,
        handlers::chatbot::chatbot,
    ),
    components(schemas(Category, CategoriesResponse)),
    tags(
        (name = "catalog", description = "Course catalog"),
        (name = "chatbot", description = "Chatbot routing")
    )
)]
pub struct ApiDoc;
