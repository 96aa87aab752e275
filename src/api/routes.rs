use crate::AppState;
use crate::api::ApiDoc;
use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;

/// Routes mounted under `/api/v1`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/chatbot", post(crate::api::handlers::chatbot::chatbot))
        .route(
            "/course/showAllCategories",
            get(crate::api::handlers::categories::show_all_categories),
        )
}

/// Full application router with health check, API docs and middleware
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config_manager.config().server.cors_origins);

    #[allow(unused_mut)]
    let mut app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api/v1", create_router());

    #[cfg(feature = "swagger-ui")]
    {
        app = app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/swagger.json", ApiDoc::openapi()),
        );
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}
