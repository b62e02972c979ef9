//! Gemini text-generation client
//!
//! One operation: prompt in, free-form text out. The plan pipelines treat
//! this boundary as opaque, so everything Gemini-specific (wire shapes,
//! endpoint layout, the key-as-query-param convention) stays in this module.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PlanError;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-pro";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// ---------------------------------------------------------------------------
/// Gemini API Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest {
  contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
  role: String,
  parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
  text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
  candidates: Option<Vec<Candidate>>,
  error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
  content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
  text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
  error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
  message: String,
}

/// ---------------------------------------------------------------------------
/// Gemini Client
/// ---------------------------------------------------------------------------

pub struct GeminiClient {
  client: Client,
  api_key: String,
  base_url: String,
}

impl GeminiClient {
  /// Create a client, loading the API key from the environment.
  pub fn from_env() -> Result<Self, PlanError> {
    let api_key = std::env::var(API_KEY_VAR).map_err(|_| PlanError::MissingCredential)?;

    Ok(Self::new(api_key))
  }

  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      api_key: api_key.into(),
      base_url: GEMINI_API_BASE.to_string(),
    }
  }

  /// Point the client at a different endpoint (tests run a local mock).
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Generate free-form text from a prompt. One attempt, no retry.
  pub async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
    let request = GenerateRequest {
      contents: vec![Content {
        role: "user".to_string(),
        parts: vec![Part {
          text: prompt.to_string(),
        }],
      }],
    };

    let response = self.client.post(self.endpoint()?).json(&request).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      // Gemini wraps failures in an error envelope; fall back to the raw body
      if let Ok(error_resp) = serde_json::from_str::<ApiErrorResponse>(&body) {
        return Err(PlanError::Transport(error_resp.error.message));
      }
      return Err(PlanError::Transport(format!("HTTP {}: {}", status, body)));
    }

    let generate_response: GenerateResponse =
      serde_json::from_str(&body).map_err(|e| PlanError::Transport(e.to_string()))?;

    if let Some(detail) = generate_response.error {
      return Err(PlanError::Transport(detail.message));
    }

    // First candidate part with text wins
    generate_response
      .candidates
      .unwrap_or_default()
      .into_iter()
      .filter_map(|c| c.content)
      .flat_map(|c| c.parts)
      .filter_map(|p| p.text)
      .find(|t| !t.is_empty())
      .ok_or_else(|| PlanError::Transport("No text content in response".to_string()))
  }

  fn endpoint(&self) -> Result<Url, PlanError> {
    let mut url = Url::parse(&format!(
      "{}/models/{}:generateContent",
      self.base_url, GEMINI_MODEL
    ))
    .map_err(|e| PlanError::Transport(format!("Invalid endpoint: {}", e)))?;
    url.query_pairs_mut().append_pair("key", &self.api_key);

    Ok(url)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
