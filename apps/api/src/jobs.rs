//! Job search client — fetches job listings for a keyword query.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Row count requested per search when the caller does not specify one.
pub const DEFAULT_ROWS: u32 = 60;

#[derive(Debug, Error)]
pub enum JobsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job search endpoint returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed job search response: {0}")]
    Shape(String),
}

/// One job listing as returned by the search provider.
/// Fields the provider omits resolve to empty strings at this boundary so
/// downstream consumers never deal with missing keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    keyword: &'a str,
    rows: u32,
}

/// Client for the job-listing search endpoint.
/// One request-response exchange per call — no pagination, no retries.
#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    base_url: String,
}

impl JobSearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Searches listings matching a comma-separated keyword string.
    /// Zero matches is a successful empty result, not an error.
    pub async fn search(&self, keywords: &str, rows: u32) -> Result<Vec<JobRecord>, JobsError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&SearchRequest { keyword: keywords, rows })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobsError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let records: Vec<JobRecord> = serde_json::from_str(&body)
            .map_err(|e| JobsError::Shape(format!("invalid JSON body: {e}")))?;

        debug!("job search returned {} listings", records.len());

        Ok(records)
    }
}
