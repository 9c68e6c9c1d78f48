//! Resume analysis orchestration.
//!
//! The mandatory flow runs three completions against the same resume text
//! (summary, skill gaps, roadmap). The optional flow chains one more
//! completion on the summary to derive job-search keywords.

pub mod handlers;
pub mod prompts;

use serde::Serialize;

use crate::llm_client::{CompletionClient, LlmError};

/// The three insight strings produced per resume. Derived fresh on every
/// request; nothing is cached or reused across requests.
#[derive(Debug, Serialize)]
pub struct ResumeAnalysis {
    pub summary: String,
    pub skill_gaps: String,
    pub roadmap: String,
}

/// Runs the three mandatory completions. The calls are independent of each
/// other but issued strictly in sequence; the first failure aborts the flow.
pub async fn analyze_resume(
    llm: &CompletionClient,
    resume_text: &str,
) -> Result<ResumeAnalysis, LlmError> {
    let summary = llm
        .complete(&prompts::summary_prompt(resume_text), prompts::SUMMARY_MAX_TOKENS)
        .await?;
    let skill_gaps = llm
        .complete(&prompts::skill_gaps_prompt(resume_text), prompts::SKILL_GAPS_MAX_TOKENS)
        .await?;
    let roadmap = llm
        .complete(&prompts::roadmap_prompt(resume_text), prompts::ROADMAP_MAX_TOKENS)
        .await?;

    Ok(ResumeAnalysis {
        summary,
        skill_gaps,
        roadmap,
    })
}

/// Derives a comma-separated job-keyword string from a resume summary.
/// This is the only call chained on a prior result.
pub async fn extract_keywords(
    llm: &CompletionClient,
    summary: &str,
) -> Result<String, LlmError> {
    let raw = llm
        .complete(&prompts::keywords_prompt(summary), prompts::KEYWORDS_MAX_TOKENS)
        .await?;
    Ok(clean_keywords(&raw))
}

/// Strips newline characters and surrounding whitespace from a keyword
/// string. Idempotent.
pub fn clean_keywords(raw: &str) -> String {
    raw.replace('\n', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::llm_client::CompletionClient;

    async fn spawn_mock(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/")
    }

    /// Completion endpoint stub that answers each analysis prompt with a
    /// fixed string, keyed on the prompt opening.
    fn scripted_completions() -> Router {
        Router::new().route(
            "/",
            post(|Json(body): Json<Value>| async move {
                let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
                let reply = if prompt.starts_with("Summarize this resume") {
                    "Seasoned backend engineer with Go expertise"
                } else if prompt.starts_with("Analyze this resume") {
                    "Missing cloud certifications"
                } else if prompt.starts_with("Based on this resume, suggest a roadmap") {
                    "Learn Kubernetes, then pursue CKA"
                } else {
                    "unexpected prompt"
                };
                Json(json!({"choices": [{"message": {"content": reply}}]}))
            }),
        )
    }

    #[test]
    fn test_clean_keywords_strips_newlines_and_whitespace() {
        assert_eq!(
            clean_keywords("Go Developer, Backend Engineer, Kubernetes Engineer\n"),
            "Go Developer, Backend Engineer, Kubernetes Engineer"
        );
        assert_eq!(clean_keywords("  Rust Developer \n SRE  "), "Rust Developer  SRE");
    }

    #[test]
    fn test_clean_keywords_is_idempotent() {
        let once = clean_keywords("Go Developer, Backend Engineer\n");
        assert_eq!(clean_keywords(&once), once);

        let already_clean = "Go Developer, Backend Engineer, Kubernetes Engineer";
        assert_eq!(clean_keywords(already_clean), already_clean);
    }

    #[tokio::test]
    async fn test_analyze_resume_yields_the_three_completion_strings() {
        let url = spawn_mock(scripted_completions()).await;
        let llm = CompletionClient::with_base_url("test-key".to_string(), url);

        let analysis = analyze_resume(
            &llm,
            "Experienced backend engineer, 5 years Go and distributed systems",
        )
        .await
        .unwrap();

        assert_eq!(analysis.summary, "Seasoned backend engineer with Go expertise");
        assert_eq!(analysis.skill_gaps, "Missing cloud certifications");
        assert_eq!(analysis.roadmap, "Learn Kubernetes, then pursue CKA");
    }

    #[tokio::test]
    async fn test_analyze_resume_aborts_on_upstream_failure() {
        let app = Router::new().route(
            "/",
            post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let url = spawn_mock(app).await;
        let llm = CompletionClient::with_base_url("test-key".to_string(), url);

        assert!(analyze_resume(&llm, "some resume").await.is_err());
    }

    #[tokio::test]
    async fn test_extract_keywords_cleans_trailing_newline() {
        let app = Router::new().route(
            "/",
            post(|Json(body): Json<Value>| async move {
                let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
                assert!(prompt.starts_with("Based on this resume summary"), "got {prompt:?}");
                assert!(prompt.contains("Backend engineer skilled in Go, Kubernetes"));
                Json(json!({"choices": [{"message": {
                    "content": "Go Developer, Backend Engineer, Kubernetes Engineer\n"
                }}]}))
            }),
        );
        let url = spawn_mock(app).await;
        let llm = CompletionClient::with_base_url("test-key".to_string(), url);

        let keywords = extract_keywords(&llm, "Backend engineer skilled in Go, Kubernetes")
            .await
            .unwrap();
        assert_eq!(keywords, "Go Developer, Backend Engineer, Kubernetes Engineer");
    }
}
