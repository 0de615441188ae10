//! Generative AI text service
//!
//! Wraps the provider's `generateContent` call behind the two fixed prompt
//! templates. Every failure (transport, status, body shape, empty answer) is
//! reported as an [`AiError`]; nothing is retried or cached.

use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::config::AiConfig;
use crate::utils::errors::{AiError, AiResult, EduCenterError, Result};
use crate::utils::logging::log_ai_request;
use super::prompts;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Provider response, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the external text-generation provider
#[derive(Clone, Debug)]
pub struct AiService {
    client: Client,
    config: AiConfig,
}

impl AiService {
    /// Create a new AiService instance
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("EduCenter/1.0")
            .build()
            .map_err(EduCenterError::Http)?;

        Ok(Self { client, config })
    }

    /// Draft a two-sentence description for a course title
    pub async fn generate_course_description(&self, course_title: &str) -> AiResult<String> {
        let prompt = prompts::course_description(course_title);
        self.generate(prompts::COURSE_DESCRIPTION, &prompt).await
    }

    /// Draft a technical instruction for an AI coding agent
    pub async fn generate_build_prompt(&self, requirements: &str) -> AiResult<String> {
        let prompt = prompts::build_prompt(requirements);
        self.generate(prompts::BUILD_PROMPT, &prompt).await
    }

    async fn generate(&self, template: &str, prompt: &str) -> AiResult<String> {
        let result = self.request_text(prompt).await;
        log_ai_request(template, prompt.chars().count(), result.is_ok());
        result
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn request_text(&self, prompt: &str) -> AiResult<String> {
        let url = self.endpoint();
        debug!(url = %url, model = %self.config.model, "Making AI provider request");

        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![RequestPart { text: prompt }] }],
        };

        let response = self.client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "AI provider returned an error status");
            return Err(AiError::RequestFailed(format!("HTTP {}: {}", status, error_text)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        parsed.text().ok_or(AiError::EmptyResponse)
    }
}
