//! Client behaviour against a local stand-in for the completion service.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use safe_config::LlmConfig;
use safe_llm::{ChatMessage, LlmClient, LlmError};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    auth: Arc<Mutex<Option<String>>>,
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn config(base_url: String, timeout_secs: u64) -> LlmConfig {
    LlmConfig {
        api_key: "sk-test".into(),
        base_url,
        timeout_secs,
        ..Default::default()
    }
}

#[tokio::test]
async fn sends_model_messages_and_bearer_key() {
    let captured = Captured::default();
    let router = Router::new()
        .route(
            "/v1/chat/completions",
            post(
                |State(c): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    *c.body.lock().await = Some(body);
                    *c.auth.lock().await = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    Json(json!({
                        "choices": [{"message": {"role": "assistant", "content": " Take it slow. "}}]
                    }))
                },
            ),
        )
        .with_state(captured.clone());
    let base = serve(router).await;

    let client = LlmClient::new(&config(base, 5)).unwrap();
    let text = client
        .complete(&[ChatMessage::system("sys"), ChatMessage::user("question")])
        .await
        .unwrap();
    assert_eq!(text, "Take it slow.");

    let body = captured.body.lock().await.clone().unwrap();
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert_eq!(body["messages"][1]["content"], "question");
    assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert_eq!(
        captured.auth.lock().await.clone().as_deref(),
        Some("Bearer sk-test")
    );
}

#[tokio::test]
async fn server_error_is_api_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = serve(router).await;

    let client = LlmClient::new(&config(base, 5)).unwrap();
    let err = client.complete(&[ChatMessage::user("q")]).await.unwrap_err();
    assert!(matches!(err, LlmError::Api { status: 500, .. }));
}

#[tokio::test]
async fn slow_service_times_out() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"choices": [{"message": {"content": "too late"}}]}))
        }),
    );
    let base = serve(router).await;

    let client = LlmClient::new(&config(base, 1)).unwrap();
    let err = client.complete(&[ChatMessage::user("q")]).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err}");
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LlmClient::new(&config(format!("http://{addr}/v1"), 2)).unwrap();
    let err = client.complete(&[ChatMessage::user("q")]).await.unwrap_err();
    assert!(matches!(err, LlmError::Http(_)));
}
