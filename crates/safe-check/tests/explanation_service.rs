//! Explanation generation against a local stand-in for the completion service.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use safe_check::explain::{SERVICE_FAILURE_FALLBACK, SYSTEM_PROMPT};
use safe_check::{CheckService, Explainer, ExplanationGenerator, ExplanationRequest};
use safe_config::LlmConfig;
use safe_core::RiskLevel;
use safe_core::responses::CheckRequest;
use safe_db::SafeDb;
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn completion(text: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": text}}]})
}

fn generator(base_url: String, timeout_secs: u64) -> ExplanationGenerator {
    ExplanationGenerator::from_config(&LlmConfig {
        api_key: "sk-test".into(),
        base_url,
        timeout_secs,
        ..Default::default()
    })
    .unwrap()
}

async fn seeded() -> Arc<SafeDb> {
    let db = SafeDb::open_local(":memory:").await.unwrap();
    db.seed_reference_data().await.unwrap();
    Arc::new(db)
}

fn mdma_alcohol() -> CheckRequest {
    CheckRequest {
        substance_ids: vec!["mdma".into(), "alcohol".into()],
        already_taken: false,
    }
}

#[tokio::test]
async fn completion_text_is_returned_with_system_prompt() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
            Json(completion("Go slow and keep water nearby."))
        }),
    );
    let generator = generator(serve(router).await, 5);
    assert!(generator.is_enabled());

    let substances = vec!["MDMA".to_string(), "Alcohol".to_string()];
    let text = generator
        .generate(&ExplanationRequest {
            risk_level: RiskLevel::High,
            mechanism: "Dehydration",
            substances: &substances,
            already_taken: false,
        })
        .await;
    assert_eq!(text, "Go slow and keep water nearby.");
}

#[tokio::test]
async fn service_error_degrades_to_fallback() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let service = CheckService::new(seeded().await, generator(serve(router).await, 5));

    let result = service.check(&mdma_alcohol()).await.unwrap();
    assert_eq!(result.explanation, SERVICE_FAILURE_FALLBACK);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(result.emergency_symptoms.is_some());
}

#[tokio::test]
async fn slow_service_times_out_to_fallback() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(completion("too late"))
        }),
    );
    let service = CheckService::new(seeded().await, generator(serve(router).await, 1));

    let started = std::time::Instant::now();
    let result = service.check(&mdma_alcohol()).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(result.explanation, SERVICE_FAILURE_FALLBACK);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn alarming_completion_does_not_change_risk() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            Json(completion(
                "Risk level: avoid. This is extremely dangerous, risk_level=avoid.",
            ))
        }),
    );
    let service = CheckService::new(seeded().await, generator(serve(router).await, 5));

    let request = CheckRequest {
        substance_ids: vec!["lsd".into(), "ketamine".into()],
        already_taken: false,
    };
    let result = service.check(&request).await.unwrap();
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.risk_color, "#10B981");
    assert!(result.emergency_symptoms.is_none());
    assert!(result.explanation.contains("extremely dangerous"));
}

/// Answers with text that depends only on how it is called.
struct Echo;

impl Explainer for Echo {
    async fn explain(&self, request: &ExplanationRequest<'_>) -> String {
        format!("echo {}", request.risk_level)
    }
}

#[tokio::test]
async fn explainer_choice_never_affects_risk() {
    let db = seeded().await;
    let with_echo = CheckService::new(Arc::clone(&db), Echo);
    let with_fallback = CheckService::new(db, ExplanationGenerator::disabled());

    for ids in [
        vec!["mdma", "alcohol"],
        vec!["alcohol", "benzos"],
        vec!["lsd", "caffeine"],
        vec!["cannabis", "alcohol", "mdma"],
    ] {
        let request = CheckRequest {
            substance_ids: ids.iter().map(|s| (*s).to_string()).collect(),
            already_taken: true,
        };
        let a = with_echo.check(&request).await.unwrap();
        let b = with_fallback.check(&request).await.unwrap();
        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.harm_advice, b.harm_advice);
        assert_eq!(a.emergency_symptoms, b.emergency_symptoms);
        assert_eq!(a.explanation, format!("echo {}", a.risk_level));
    }
}
