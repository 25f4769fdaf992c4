use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::enhance::error::EnhanceError;
use crate::enhance::prompt::{build_user_prompt, response_schema, SYSTEM_INSTRUCTION};
use crate::enhance::result::EnhancementResult;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used when neither the CLI nor the config file overrides it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Generation parameters favoring creative but controlled output.
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.95;

/// The configured Gemini client.
///
/// Constructed once at startup and passed by `Arc` into the submission
/// handler. One [`EnhanceClient::enhance`] call per submission, best effort.
pub struct EnhanceClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl EnhanceClient {
    /// Build a client from an explicit key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Build a client from the process environment. A missing or blank
    /// `GEMINI_API_KEY` is a fatal startup condition.
    pub fn from_env(model: &str) -> Result<Self> {
        let api_key = resolve_api_key(env::var(API_KEY_ENV).ok())?;
        Self::new(api_key, model)
    }

    /// Override the endpoint base URL (used by tests and proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one enhancement call: fixed prompt in, shape-checked
    /// [`EnhancementResult`] out.
    pub async fn enhance(&self, text: &str) -> Result<EnhancementResult, EnhanceError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnhanceError::Api { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        let raw = body.candidate_text().ok_or_else(|| {
            EnhanceError::Shape("response contained no candidate text".to_string())
        })?;

        EnhancementResult::from_model_json(raw)
    }
}

/// Reject an absent or blank API key with an actionable message.
fn resolve_api_key(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => bail!("{API_KEY_ENV} environment variable is not set"),
    }
}

fn build_request(text: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_user_prompt(text),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

// Wire types for the generateContent REST call. Only the fields this client
// sends and reads are modeled.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn candidate_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}
