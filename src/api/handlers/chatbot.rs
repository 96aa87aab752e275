use crate::AppState;
use axum::{
    extract::{Request, State},
    response::Response,
};

/// Hand a chatbot request to the configured controller.
///
/// The request is passed through as received; status and body come from the
/// controller.
#[utoipa::path(
    post,
    path = "/api/v1/chatbot",
    responses(
        (status = 200, description = "Chatbot reply, as produced by the chatbot service"),
        (status = 502, description = "Chatbot service failed"),
        (status = 503, description = "No chatbot service configured")
    ),
    tag = "chatbot"
)]
pub async fn chatbot(State(state): State<AppState>, req: Request) -> Response {
    state.chatbot.handle(req).await
}
