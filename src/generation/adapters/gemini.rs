//! Gemini `generateContent` client.

use crate::config::GeneratorConfig;
use crate::generation::ports::{TextGenerator, TextGeneratorError, TextGeneratorResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

const API_KEY_HEADER: &str = "x-goog-api-key";
const TOO_MANY_REQUESTS: u16 = 429;

/// Text generator backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiTextGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiTextGenerator {
    /// Creates a client from generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TextGeneratorError::MissingApiKey`] when no key is configured
    /// and [`TextGeneratorError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &GeneratorConfig) -> TextGeneratorResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(TextGeneratorError::transport)?;
        Self::with_client(client, config)
    }

    /// Creates a generator that reuses an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`TextGeneratorError::MissingApiKey`] when no key is configured.
    pub fn with_client(
        client: reqwest::Client,
        config: &GeneratorConfig,
    ) -> TextGeneratorResult<Self> {
        if !config.is_configured() {
            return Err(TextGeneratorError::MissingApiKey);
        }
        Ok(Self {
            client,
            endpoint: endpoint_for(&config.base_url, &config.model),
            api_key: config.api_key.trim().to_owned(),
        })
    }

    /// Returns the resolved `generateContent` URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for GeminiTextGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiTextGenerator")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> TextGeneratorResult<String> {
        tracing::debug!(endpoint = %self.endpoint, "requesting generateContent");
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::for_prompt(prompt))
            .send()
            .await
            .map_err(TextGeneratorError::transport)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(TextGeneratorError::transport)?;

        if !response_is_success(status) {
            tracing::warn!(status, endpoint = %self.endpoint, "generateContent rejected");
            return Err(classify_status(status, body));
        }
        extract_text(&body)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

impl<'a> GenerateContentRequest<'a> {
    const fn for_prompt(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn endpoint_for(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model.trim()
    )
}

fn response_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn classify_status(status: u16, body: String) -> TextGeneratorError {
    if status == TOO_MANY_REQUESTS {
        TextGeneratorError::Quota(body)
    } else {
        TextGeneratorError::Status { status, body }
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(body: &str) -> TextGeneratorResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| TextGeneratorError::MalformedResponse(err.to_string()))?;
    let parts = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .ok_or_else(|| TextGeneratorError::MalformedResponse("no candidates".to_owned()))?;
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.is_empty() {
        return Err(TextGeneratorError::MalformedResponse(
            "candidate has no text parts".to_owned(),
        ));
    }
    Ok(text)
}
