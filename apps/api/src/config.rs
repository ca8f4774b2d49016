use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Upper bound on a single model call. A timeout is handled like any other failure.
pub const LLM_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration loaded from environment variables.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` puts the service in always-fallback mode.
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

/// Connection settings for the chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: non_blank(std::env::var("OPENROUTER_API_KEY").ok()),
            openrouter_model: optional_env("OPENROUTER_MODEL", DEFAULT_MODEL),
            openrouter_api_url: optional_env("OPENROUTER_API_URL", DEFAULT_API_URL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }

    /// The model connection settings, or `None` when no credential is configured.
    pub fn llm(&self) -> Option<LlmConfig> {
        self.openrouter_api_key.as_ref().map(|api_key| LlmConfig {
            api_key: api_key.clone(),
            api_url: self.openrouter_api_url.clone(),
            model: self.openrouter_model.clone(),
            timeout: LLM_TIMEOUT,
        })
    }
}

fn optional_env(key: &str, default: &str) -> String {
    non_blank(std::env::var(key).ok()).unwrap_or_else(|| default.to_string())
}

/// Treats an empty or whitespace-only value the same as an unset one.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
