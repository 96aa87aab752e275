use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_test::TestServer;
use parking_lot::Mutex;
use serde_json::json;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use studyhub::{
    AppState, ConfigManager, StudyHubConfig,
    api::routes::build_app,
    chatbot::{ChatBotController, UnconfiguredChatBot, UpstreamChatBot},
    types::Category,
};
use wiremock::matchers::{body_json, header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Mock Chatbot Controllers =============

/// What the controller saw for one request
#[derive(Debug, Clone)]
struct SeenRequest {
    method: String,
    uri: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Records every request it is handed and answers with a fixed reply
#[derive(Default)]
struct RecordingChatBot {
    seen: Mutex<Vec<SeenRequest>>,
}

#[async_trait]
impl ChatBotController for RecordingChatBot {
    async fn handle(&self, req: Request) -> Response {
        let (parts, body) = req.into_parts();
        let body = axum::body::to_bytes(body, 1024 * 1024)
            .await
            .expect("body")
            .to_vec();

        self.seen.lock().push(SeenRequest {
            method: parts.method.to_string(),
            uri: parts.uri.to_string(),
            content_type: parts
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });

        (StatusCode::CREATED, "recorded").into_response()
    }
}

// ============= Test Helpers =============

fn test_config() -> StudyHubConfig {
    let mut config = StudyHubConfig::default();
    config.catalog.categories = vec![
        Category {
            name: "Web Development".to_string(),
            description: Some("HTML, CSS and JavaScript".to_string()),
        },
        Category {
            name: "Python".to_string(),
            description: None,
        },
    ];
    config
}

fn create_test_app(config: StudyHubConfig, chatbot: Arc<dyn ChatBotController>) -> Router {
    let state = AppState {
        config_manager: Arc::new(ConfigManager::from_config(config)),
        chatbot,
    };
    build_app(state)
}

fn create_test_server(chatbot: Arc<dyn ChatBotController>) -> TestServer {
    TestServer::new(create_test_app(test_config(), chatbot)).expect("Failed to create test server")
}

// ============= Health Check Tests =============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(Arc::new(UnconfiguredChatBot));

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = create_test_server(Arc::new(UnconfiguredChatBot));

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/api/v1/chatbot"].is_object());
    assert!(body["paths"]["/api/v1/course/showAllCategories"].is_object());
}

// ============= Catalog Tests =============

#[tokio::test]
async fn test_show_all_categories() {
    let server = create_test_server(Arc::new(UnconfiguredChatBot));

    let response = server.get("/api/v1/course/showAllCategories").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "data": [
            { "name": "Web Development", "description": "HTML, CSS and JavaScript" },
            { "name": "Python" }
        ]
    }));
}

#[tokio::test]
async fn test_show_all_categories_empty_catalog() {
    let app = create_test_app(StudyHubConfig::default(), Arc::new(UnconfiguredChatBot));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/v1/course/showAllCategories").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_categories_reject_post() {
    let server = create_test_server(Arc::new(UnconfiguredChatBot));

    let response = server.post("/api/v1/course/showAllCategories").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// ============= Chatbot Routing Tests =============

#[tokio::test]
async fn test_chatbot_passes_request_through_unmodified() {
    let recorder = Arc::new(RecordingChatBot::default());
    let server = create_test_server(recorder.clone());

    let response = server
        .post("/api/v1/chatbot")
        .json(&json!({ "message": "Which course should I take first?" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_text("recorded");

    let seen = recorder.seen.lock().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "POST");
    assert!(seen[0].uri.ends_with("/chatbot"));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&seen[0].body).unwrap();
    assert_eq!(body["message"], "Which course should I take first?");
}

#[tokio::test]
async fn test_chatbot_does_not_validate_body() {
    let recorder = Arc::new(RecordingChatBot::default());
    let server = create_test_server(recorder.clone());

    let response = server
        .post("/api/v1/chatbot")
        .content_type("text/plain")
        .bytes("not json at all".into())
        .await;

    response.assert_status(StatusCode::CREATED);
    let seen = recorder.seen.lock().clone();
    assert_eq!(seen[0].body, b"not json at all");
}

#[tokio::test]
async fn test_chatbot_rejects_get() {
    let recorder = Arc::new(RecordingChatBot::default());
    let server = create_test_server(recorder.clone());

    let response = server.get("/api/v1/chatbot").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(recorder.seen.lock().is_empty());
}

#[tokio::test]
async fn test_chatbot_unconfigured() {
    let server = create_test_server(Arc::new(UnconfiguredChatBot));

    let response = server
        .post("/api/v1/chatbot")
        .json(&json!({ "message": "hello" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Chatbot is not configured");
}

#[tokio::test]
async fn test_chatbot_concurrent_requests_are_independent() {
    let recorder = Arc::new(RecordingChatBot::default());
    let server = create_test_server(recorder.clone());

    let requests = (0..8).map(|i| {
        server
            .post("/api/v1/chatbot")
            .json(&json!({ "message": format!("question {}", i) }))
    });
    let responses = futures::future::join_all(requests.map(|r| r.into_future())).await;

    for response in responses {
        response.assert_status(StatusCode::CREATED);
    }
    assert_eq!(recorder.seen.lock().len(), 8);
}

// ============= Upstream Chatbot Tests =============

#[tokio::test]
async fn test_upstream_chatbot_forwards_body_and_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header_matcher("content-type", "application/json"))
        .and(body_json(json!({ "message": "What is Rust?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "reply": "A systems language." })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let chatbot = UpstreamChatBot::new(
        format!("{}/chat", mock_server.uri()),
        Duration::from_secs(5),
        64 * 1024,
    )
    .unwrap();
    let server = create_test_server(Arc::new(chatbot));

    let response = server
        .post("/api/v1/chatbot")
        .json(&json!({ "message": "What is Rust?" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        HeaderValue::from_static("application/json")
    );
    let body: serde_json::Value = response.json();
    assert_eq!(body["reply"], "A systems language.");
}

#[tokio::test]
async fn test_upstream_chatbot_keeps_upstream_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "message is required" })),
        )
        .mount(&mock_server)
        .await;

    let chatbot = UpstreamChatBot::new(
        format!("{}/chat", mock_server.uri()),
        Duration::from_secs(5),
        64 * 1024,
    )
    .unwrap();
    let server = create_test_server(Arc::new(chatbot));

    let response = server.post("/api/v1/chatbot").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "message is required");
}

#[tokio::test]
async fn test_upstream_chatbot_timeout_is_bad_gateway() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let chatbot = UpstreamChatBot::new(
        format!("{}/chat", mock_server.uri()),
        Duration::from_millis(200),
        64 * 1024,
    )
    .unwrap();
    let server = create_test_server(Arc::new(chatbot));

    let response = server
        .post("/api/v1/chatbot")
        .json(&json!({ "message": "slow" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Chatbot service timed out");
}
