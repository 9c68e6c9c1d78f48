pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mandatory flow: upload → extract → summary / skill gaps / roadmap
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        // Optional branch: keyword extraction and job search
        .route("/api/v1/analysis/keywords", post(handlers::handle_keywords))
        .route("/api/v1/jobs/search", post(handlers::handle_job_search))
        .route("/api/v1/jobs/recommend", post(handlers::handle_recommend))
        .with_state(state)
}
