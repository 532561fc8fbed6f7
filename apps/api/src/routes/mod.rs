pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Escaped JSON can be larger than the decoded text, so size checks on the
    // text itself happen in the handlers.
    let body_limit = state.config.body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route("/api/v1/analysis/preview", post(handlers::handle_preview))
        .route("/api/v1/analysis/config", get(handlers::handle_get_config))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::config::ScoringConfig;
    use crate::analysis::engine::Analyzer;
    use crate::config::Config;

    const RESUME: &str = "Jane Roe\njane.roe@example.org\n\nSummary\nBackend engineer.\n\n\
        Experience\n- Spearheaded a React rewrite on Node.js.\n\nSkills\nReact, MongoDB\n\n\
        Education\nBSc Computer Science";

    fn test_state(max_input_bytes: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                max_input_bytes,
                scoring: ScoringConfig::default(),
            },
            analyzer: Arc::new(Analyzer::with_defaults().unwrap()),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body(resp: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = build_router(test_state(1024));
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["service"], "ats-api");
    }

    #[tokio::test]
    async fn analyze_returns_score_and_feedback() {
        let app = build_router(test_state(64 * 1024));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "resume_text": RESUME, "jd_text": "React Node.js MongoDB" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_body(resp).await;
        let analysis = &body["analysis"];
        assert_eq!(analysis["score"], 100);
        assert_eq!(analysis["breakdown"]["keywords"], 30);
        assert_eq!(analysis["keyword_band"], "strong");
        assert_eq!(analysis["missing_core_sections"], json!([]));
        assert_eq!(analysis["strong_verbs_used"], json!(["Spearheaded"]));
        assert_eq!(body["feedback"].as_array().unwrap().len(), 4);
        assert!(body["analysis_id"].is_string());
    }

    #[tokio::test]
    async fn analyze_without_jd_uses_zero_credit() {
        let app = build_router(test_state(64 * 1024));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "resume_text": RESUME }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["analysis"]["score"], 70);
        assert_eq!(body["analysis"]["keyword_band"], "no_job_description");
        assert_eq!(body["feedback"][1]["level"], "info");
    }

    #[tokio::test]
    async fn analyze_rejects_empty_resume() {
        let app = build_router(test_state(1024));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "resume_text": "   \n", "jd_text": "Rust" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn analyze_rejects_oversized_input() {
        let app = build_router(test_state(16));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "resume_text": "Skills\nRust, Tokio, Axum, Serde" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn preview_renders_html() {
        let app = build_router(test_state(64 * 1024));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis/preview",
                json!({ "resume_text": RESUME, "template": "minimal" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["candidate_name"], "Jane Roe");
        assert_eq!(body["template"]["class_name"], "theme-minimal");
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("<h2 class=\"section-heading\">Experience</h2>"));
        assert!(html.contains("<li>Spearheaded a React rewrite on Node.js.</li>"));
    }

    #[tokio::test]
    async fn preview_rejects_unknown_template() {
        let app = build_router(test_state(64 * 1024));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis/preview",
                json!({ "resume_text": RESUME, "template": "brutalist" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn huge_input_ceiling_still_serves_requests() {
        let app = build_router(test_state(usize::MAX / 2));
        let resp = app
            .oneshot(post_json(
                "/api/v1/analysis",
                json!({ "resume_text": RESUME }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn config_endpoint_exposes_weights() {
        let app = build_router(test_state(1024));
        let resp = app
            .oneshot(
                Request::get("/api/v1/analysis/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["weights"]["structure"], 40);
        assert_eq!(body["empty_jd_policy"], "zero_credit");
    }
}
