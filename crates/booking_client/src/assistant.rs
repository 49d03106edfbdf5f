//! Thin relay to the text-generation service behind the chat widget.
//!
//! Same shape as the booking submission: call a remote API, hand back the
//! rendered result, surface failure. No conversation state and no prompt
//! content live here; the caller supplies the full prompt and renders the
//! fallback notice on error.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::{error, info};
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};

use crate::http::{build_http_client, build_retry_client};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}

/// Client for the generateContent-style text API.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: Arc<ClientWithMiddleware>,
    endpoint: String,
    api_key: String,
}

impl AssistantClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = build_http_client().expect("assistant client");
        let retry_client = build_retry_client(client);

        AssistantClient {
            client: Arc::new(retry_client),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Send one prompt and return the first candidate's text.
    pub async fn generate_reply(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 500,
                temperature: 0.7,
            },
        };

        info!("Requesting assistant reply ({} chars)", prompt.len());
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Assistant request failed: {status}");
            return Err(anyhow!("API request failed: {status}"));
        }

        let body = response.json::<GenerateResponse>().await?;
        body.first_text()
            .ok_or_else(|| anyhow!("assistant response carried no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn extracts_first_candidate_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(header("X-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "The pyramids were built over decades." }] }
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AssistantClient::new(format!("{}/generate", mock_server.uri()), "test-key");
        let reply = client
            .generate_reply("Tell me about the pyramids")
            .await
            .expect("reply");
        assert_eq!(reply, "The pyramids were built over decades.");
    }

    #[tokio::test]
    async fn empty_candidates_surface_as_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&mock_server)
            .await;

        let client = AssistantClient::new(format!("{}/generate", mock_server.uri()), "test-key");
        let result = client.generate_reply("anything").await;
        assert!(result.is_err());
    }
}
