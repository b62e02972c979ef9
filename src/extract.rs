//! JSON extraction from free-form generation output
//!
//! Model replies wrap the payload in prose or code fences more often than
//! not. This module carves the reply down to its JSON span and type-checks
//! it against the requested plan shape.

use serde::de::DeserializeOwned;

use crate::error::PlanError;

/// Slice raw model output down to its JSON span.
///
/// Two positional trims: everything before the first `{` goes when the text
/// does not already start with one, then everything after the last `}` goes
/// when it does not already end with one. Text without any `{` survives the
/// first trim unchanged; text without any `}` collapses to empty under the
/// second, so brace-less text comes out empty. Either way the caller's parse
/// fails cleanly.
///
/// Braces inside string values are not understood: trailing prose that
/// contains `}` drags the cut past the real end of the payload, and the
/// parse then rejects the span. Known fragility, kept as-is.
pub fn json_span(text: &str) -> &str {
  let text = if text.starts_with('{') {
    text
  } else {
    match text.find('{') {
      Some(start) => &text[start..],
      None => text,
    }
  };

  if text.ends_with('}') {
    return text;
  }
  match text.rfind('}') {
    Some(end) => &text[..=end],
    None => "",
  }
}

/// Extract and type-check a plan payload of shape `T`.
///
/// Every failure mode, from no JSON present to a missing or mistyped field,
/// is the same format error; callers never see a partially populated plan.
pub fn extract_plan<T: DeserializeOwned>(raw: &str) -> Result<T, PlanError> {
  let span = json_span(raw);

  serde_json::from_str(span).map_err(|e| PlanError::InvalidResponseFormat(format!("{}: {}", e, span)))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
