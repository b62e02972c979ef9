//! Error taxonomy for the plan generation flow
//!
//! Three conditions cover everything that can go wrong between a user action
//! and a displayed plan. All of them stop at the orchestrator, which maps
//! them to canned fallback plans; nothing here reaches a renderer.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum PlanError {
  /// No API key in the environment. Checked before any network call.
  #[error("Gemini API key not configured")]
  MissingCredential,

  /// The generation call itself failed: network, auth, quota, or a reply
  /// with no usable text in it.
  #[error("Generation request failed: {0}")]
  Transport(String),

  /// The returned text carried no parseable payload of the expected shape.
  #[error("Invalid response format: {0}")]
  InvalidResponseFormat(String),
}

impl From<reqwest::Error> for PlanError {
  fn from(err: reqwest::Error) -> Self {
    PlanError::Transport(err.to_string())
  }
}
