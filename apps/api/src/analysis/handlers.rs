//! Axum route handlers for the analysis and job recommendation flow.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyze_resume, extract_keywords, ResumeAnalysis};
use crate::errors::AppError;
use crate::extraction::extract_resume_text;
use crate::jobs::{JobRecord, DEFAULT_ROWS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: String,
}

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub keywords: String,
    pub rows: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub keywords: String,
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
/// Multipart upload of one PDF under the `resume` field. Extracts the text
/// and runs the three mandatory completions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut pdf: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("resume") {
            pdf = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
            );
        }
    }
    let pdf = pdf.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;

    let resume_text = extract_resume_text(&pdf)?;
    info!("extracted {} chars of resume text", resume_text.len());

    let analysis = analyze_resume(&state.llm, &resume_text).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/analysis/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(req): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let keywords = extract_keywords(&state.llm, &req.summary).await?;
    info!("extracted job keywords: {keywords}");
    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/jobs/search
/// An empty result set is a success ("no jobs found"), not a failure.
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(req): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let rows = req.rows.unwrap_or(DEFAULT_ROWS);
    let jobs = state.jobs.search(&req.keywords, rows).await?;
    let count = jobs.len();
    Ok(Json(JobSearchResponse { jobs, count }))
}

/// POST /api/v1/jobs/recommend
/// Chains keyword extraction on the summary, then searches listings with the
/// cleaned keyword string.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let keywords = extract_keywords(&state.llm, &req.summary).await?;
    info!("extracted job keywords: {keywords}");

    let jobs = state.jobs.search(&keywords, DEFAULT_ROWS).await?;
    let count = jobs.len();
    Ok(Json(RecommendResponse {
        keywords,
        jobs,
        count,
    }))
}
