use anyhow::{Context, Result};

/// Default job search provider endpoint. Override with JOBS_API_URL.
const DEFAULT_JOBS_API_URL: &str = "https://api.jobsearch.one/api/v1/listings/search";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub euri_api_key: String,
    pub jobs_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            euri_api_key: require_env("EURI_API_KEY")?,
            jobs_api_url: std::env::var("JOBS_API_URL")
                .unwrap_or_else(|_| DEFAULT_JOBS_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
