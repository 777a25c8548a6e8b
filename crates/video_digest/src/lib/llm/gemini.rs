use reqwest::Client;
use serde::Deserialize;

use crate::llm::summarizer::{Summarizer, SummaryResponse};

/// Text-generation collaborator. Constructed once with an explicit key and
/// handed to the pipeline; there is no process-global configuration.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("response contained no generated text")]
    EmptyResponse,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        model_name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt.into() }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url,
                model_name.into()
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }

    /// Rough 4-chars-per-token budget against the trait's context limit.
    fn clamp_to_context_window(content: &str) -> &str {
        let max_chars = Self::CONTEXT_WINDOW_LIMIT * 4;
        match content.char_indices().nth(max_chars) {
            Some((cut, _)) => {
                tracing::warn!(max_chars, "Content exceeds context window, truncating");
                &content[..cut]
            }
            None => content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: String,
}

impl Summarizer for GeminiClient {
    const SUMMARIZER_MODEL: &'static str = "gemini-2.5-pro";
    type Error = GeminiError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        let content = Self::clamp_to_context_window(content);
        let response = self
            .send_generate_request(Self::SUMMARIZER_MODEL, content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty())
            .ok_or(GeminiError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}
