//! Route table and middleware for the SafeUse API.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use safe_config::ServerConfig;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with CORS and request tracing.
///
/// `GET /api` and `GET /api/` both answer the root message.
pub fn router(ctx: ApiContext, server: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/", get(endpoints::root::index))
        .route("/health", get(endpoints::health::check))
        .route("/substances", get(endpoints::reference::substances))
        .route("/symptoms", get(endpoints::reference::symptoms))
        .route("/check", post(endpoints::check::run))
        .route("/seed-data", post(endpoints::seed::reseed))
        .with_state(ctx);

    Router::new()
        .route("/api/", get(endpoints::root::index))
        .nest("/api", api)
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins = server
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(origin = %origin, %error, "ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();
    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use safe_check::{CheckService, ExplanationGenerator};
    use safe_core::responses::{CheckResult, MAX_SUBSTANCE_IDS};
    use safe_db::SafeDb;
    use schemars::schema_for;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn seeded_ctx() -> ApiContext {
        let db = Arc::new(SafeDb::open_local(":memory:").await.unwrap());
        db.seed_reference_data().await.unwrap();
        let checker = Arc::new(CheckService::new(
            Arc::clone(&db),
            ExplanationGenerator::disabled(),
        ));
        ApiContext::new(db, checker)
    }

    fn app(ctx: ApiContext) -> Router {
        router(ctx, &ServerConfig::default())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_message_with_and_without_trailing_slash() {
        let ctx = seeded_ctx().await;
        for uri in ["/api", "/api/"] {
            let response = app(ctx.clone()).oneshot(get_req(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(
                json_body(response).await,
                json!({"message": "SAFEUSE API - Harm Reduction Drug Interaction Checker"})
            );
        }
    }

    #[tokio::test]
    async fn health_reports_store_and_llm_state() {
        let response = app(seeded_ctx().await)
            .oneshot(get_req("/api/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "ok");
        assert_eq!(body["llm_configured"], false);
    }

    #[tokio::test]
    async fn substances_listed_in_seed_order() {
        let response = app(seeded_ctx().await)
            .oneshot(get_req("/api/substances"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 33);
        assert_eq!(items[0]["id"], "mdma");
        assert_eq!(items[0]["common_names"], json!(["Ecstasy", "Molly", "E", "X"]));
    }

    #[tokio::test]
    async fn symptoms_include_every_tier() {
        let response = app(seeded_ctx().await)
            .oneshot(get_req("/api/symptoms"))
            .await
            .unwrap();

        let body = json_body(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0]["name"], "Chest pain or pressure");
        assert!(items.iter().any(|s| s["severity"] == "monitor"));
    }

    #[tokio::test]
    async fn check_returns_full_result_matching_schema() {
        let response = app(seeded_ctx().await)
            .oneshot(post_json(
                "/api/check",
                r#"{"substance_ids": ["mdma", "alcohol"], "already_taken": false}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["risk_level"], "high");
        assert_eq!(body["risk_color"], "#EF4444");
        assert_eq!(body["substances"], json!(["MDMA", "Alcohol"]));
        assert_eq!(body["emergency_symptoms"].as_array().unwrap().len(), 6);
        assert_eq!(
            body["explanation"],
            "Unable to generate explanation at this time."
        );

        let schema = serde_json::to_value(schema_for!(CheckResult)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        assert!(validator.is_valid(&body));
    }

    #[tokio::test]
    async fn check_low_risk_serializes_null_symptoms() {
        let response = app(seeded_ctx().await)
            .oneshot(post_json("/api/check", r#"{"substance_ids": ["lsd", "ketamine"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["risk_level"], "low");
        assert_eq!(body["emergency_symptoms"], Value::Null);
        assert_eq!(body["unresolved_ids"], json!([]));
    }

    #[tokio::test]
    async fn check_single_substance_is_not_an_error() {
        let response = app(seeded_ctx().await)
            .oneshot(post_json("/api/check", r#"{"substance_ids": ["mdma"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["risk_level"], "unknown");
        assert_eq!(body["risk_color"], "#6B7280");
    }

    #[tokio::test]
    async fn malformed_check_bodies_are_rejected() {
        let ctx = seeded_ctx().await;

        let syntax = app(ctx.clone())
            .oneshot(post_json("/api/check", "{not json"))
            .await
            .unwrap();
        assert_eq!(syntax.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(syntax).await["error"]["code"], "INVALID_BODY");

        let missing = app(ctx.clone())
            .oneshot(post_json("/api/check", r#"{"already_taken": true}"#))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let untyped = Request::builder()
            .method("POST")
            .uri("/api/check")
            .body(Body::from(r#"{"substance_ids": ["mdma"]}"#))
            .unwrap();
        let untyped = app(ctx).oneshot(untyped).await.unwrap();
        assert_eq!(untyped.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn check_rejects_more_than_max_ids() {
        let ctx = seeded_ctx().await;
        let body = |n: usize| {
            let ids: Vec<String> = (0..n).map(|i| format!("x{i}")).collect();
            json!({ "substance_ids": ids }).to_string()
        };

        let over = app(ctx.clone())
            .oneshot(post_json("/api/check", &body(MAX_SUBSTANCE_IDS + 1)))
            .await
            .unwrap();
        assert_eq!(over.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error = json_body(over).await;
        assert_eq!(error["error"]["code"], "INVALID_BODY");
        assert!(
            error["error"]["message"]
                .as_str()
                .unwrap()
                .contains("at most 100")
        );

        let at_limit = app(ctx)
            .oneshot(post_json("/api/check", &body(MAX_SUBSTANCE_IDS)))
            .await
            .unwrap();
        assert_eq!(at_limit.status(), StatusCode::OK);
        assert_eq!(json_body(at_limit).await["risk_level"], "unknown");
    }

    #[tokio::test]
    async fn seed_data_reports_counts() {
        let response = app(seeded_ctx().await)
            .oneshot(post_json("/api/seed-data", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "message": "Database seeded successfully",
                "counts": {
                    "substances": 33,
                    "interactions": 89,
                    "harm_advice": 9,
                    "symptoms": 7
                }
            })
        );
    }

    #[tokio::test]
    async fn store_failure_returns_generic_500() {
        let ctx = seeded_ctx().await;
        ctx.db
            .conn()
            .execute_batch("DROP TABLE substances; DROP TABLE interactions;")
            .await
            .unwrap();

        let listing = app(ctx.clone())
            .oneshot(get_req("/api/substances"))
            .await
            .unwrap();
        assert_eq!(listing.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(listing).await;
        assert_eq!(
            body,
            json!({"error": {"code": "INTERNAL", "message": "An internal error occurred"}})
        );

        let check = app(ctx)
            .oneshot(post_json("/api/check", r#"{"substance_ids": ["mdma", "alcohol"]}"#))
            .await
            .unwrap();
        assert_eq!(check.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!json_body(check).await.to_string().contains("no such table"));
    }

    #[tokio::test]
    async fn any_origin_by_default() {
        let request = Request::builder()
            .uri("/api/substances")
            .header("origin", "https://somewhere.example")
            .body(Body::empty())
            .unwrap();
        let response = app(seeded_ctx().await).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn configured_origins_are_enforced() {
        let server = ServerConfig {
            cors_allow_origins: vec!["https://app.safeuse.example".into()],
            ..Default::default()
        };
        let ctx = seeded_ctx().await;

        let allowed = Request::builder()
            .uri("/api/health")
            .header("origin", "https://app.safeuse.example")
            .body(Body::empty())
            .unwrap();
        let response = router(ctx.clone(), &server).oneshot(allowed).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("https://app.safeuse.example")
        );

        let other = Request::builder()
            .uri("/api/health")
            .header("origin", "https://elsewhere.example")
            .body(Body::empty())
            .unwrap();
        let response = router(ctx, &server).oneshot(other).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app(seeded_ctx().await)
            .oneshot(get_req("/check"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
