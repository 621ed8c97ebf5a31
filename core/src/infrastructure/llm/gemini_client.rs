use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    grocery::{
        entities::{Candidate, ContentPart},
        ports::LLMClient,
    },
};

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

impl fmt::Debug for GeminiLLMClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiLLMClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<CandidateResponse>,
}

#[derive(Debug, Deserialize)]
struct CandidateResponse {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl From<PartResponse> for ContentPart {
    fn from(part: PartResponse) -> Self {
        match part.text {
            Some(text) => ContentPart::Text(text),
            None => ContentPart::Other(
                part.other
                    .keys()
                    .next()
                    .cloned()
                    .unwrap_or_else(|| "empty part".to_string()),
            ),
        }
    }
}

impl GeminiResponse {
    fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
            .into_iter()
            .map(|candidate| Candidate {
                parts: candidate
                    .content
                    .map(|content| content.parts.into_iter().map(ContentPart::from).collect())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                CoreError::UpstreamError(format!("failed to initialize Gemini client: {}", e))
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<Vec<Candidate>, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::UpstreamError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::UpstreamError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(gemini_response.into_candidates())
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_content(&self, prompt: String) -> Result<Vec<Candidate>, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        self.call_gemini_api(request).await
    }
}
