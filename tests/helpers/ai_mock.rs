//! Mock generative AI provider for testing
//!
//! A wiremock server answering the provider's `generateContent` call.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_MODEL: &str = "gemini-2.0-flash";
pub const TEST_API_KEY: &str = "test-api-key";

/// Mock AI provider
pub struct AiMockServer {
    pub server: MockServer,
}

impl AiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn generate_path() -> String {
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    }

    /// Answer every generation with `text`, split over two parts
    pub async fn mock_text(&self, text: &str) {
        self.mock_text_delayed(text, Duration::ZERO).await;
    }

    /// Like [`mock_text`](Self::mock_text), answering only after `delay`
    pub async fn mock_text_delayed(&self, text: &str, delay: Duration) {
        let middle = text.len() / 2;
        let split = (0..=middle).rev().find(|i| text.is_char_boundary(*i)).unwrap_or(0);
        let (head, tail) = text.split_at(split);

        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": head }, { "text": tail }] },
                "finishReason": "STOP"
            }]
        });
        self.mount_ok(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
            .await;
    }

    /// Answer with an arbitrary 200 body
    pub async fn mock_body(&self, body: Value) {
        self.mount_ok(ResponseTemplate::new(200).set_body_json(body)).await;
    }

    async fn mount_ok(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(Self::generate_path()))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Answer with a provider error, e.g. 429 for an exhausted quota
    pub async fn mock_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(Self::generate_path()))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "code": status, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Prompts the provider received, in order
    pub async fn received_prompts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.body_json::<Value>().ok())
            .filter_map(|body| body["contents"][0]["parts"][0]["text"].as_str().map(str::to_string))
            .collect()
    }
}
