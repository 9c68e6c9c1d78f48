use crate::jobs::JobSearchClient;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: CompletionClient,
    pub jobs: JobSearchClient,
}
