//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::config::ScoringConfig;
use crate::analysis::models::{AnalysisResult, FeedbackItem};
use crate::errors::AppError;
use crate::preview::templates::TemplateInfo;
use crate::preview::{candidate_name, plain_to_html, Template};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
    pub feedback: Vec<FeedbackItem>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub resume_text: String,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub candidate_name: String,
    pub template: TemplateInfo,
    pub html: String,
}

fn check_size(field: &str, text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        warn!(field, bytes = text.len(), max_bytes, "input rejected as too large");
        return Err(AppError::PayloadTooLarge(format!(
            "{field} exceeds {max_bytes} bytes"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Scores a résumé against an optional job description and returns the
/// analysis with feedback. An empty résumé is a 400, never a zero score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let max = state.config.max_input_bytes;
    check_size("resume_text", &request.resume_text, max)?;
    check_size("jd_text", &request.jd_text, max)?;

    // Multi-megabyte inputs take real CPU time; keep it off the async workers.
    let analyzer = state.analyzer.clone();
    let (analysis, feedback) = tokio::task::spawn_blocking(move || {
        analyzer
            .analyze(&request.resume_text, &request.jd_text)
            .map(|analysis| {
                let feedback = analyzer.feedback(&analysis);
                (analysis, feedback)
            })
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        score = analysis.score,
        missing_sections = analysis.missing_core_sections.len(),
        jd_keywords = analysis.unique_job_description_keyword_count,
        "resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        analysis,
        feedback,
    }))
}

/// POST /api/v1/analysis/preview
///
/// Renders the résumé as template-ready HTML for the client-side PDF export.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    check_size("resume_text", &request.resume_text, state.config.max_input_bytes)?;
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let template = match request.template.as_deref() {
        Some(raw) => raw.parse::<Template>().map_err(AppError::Validation)?,
        None => Template::default(),
    };

    Ok(Json(PreviewResponse {
        candidate_name: candidate_name(&request.resume_text),
        template: template.into(),
        html: plain_to_html(&request.resume_text, state.analyzer.sections()),
    }))
}

/// GET /api/v1/analysis/config
///
/// Returns the active scoring policy so clients can explain a score.
pub async fn handle_get_config(State(state): State<AppState>) -> Json<ScoringConfig> {
    Json(state.analyzer.config().clone())
}
