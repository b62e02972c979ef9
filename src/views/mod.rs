//! Per-view presentation state
//!
//! Each page owns an explicit state struct with pure transitions; rendering
//! lives elsewhere. The email-capture gate both pages share is modeled here.

mod calorie;
mod lift;

pub use calorie::CalorieView;
pub use lift::LiftView;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Email Gate
/// ---------------------------------------------------------------------------

/// Syntactic shape only; the gate is a capture step, not verification.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn is_valid_email(email: &str) -> bool {
  EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// State of the email-capture step in front of a generated plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailGate {
  pub visible: bool,
  pub email: String,
  pub error: Option<String>,
  pub submitted: bool,
}

impl EmailGate {
  pub fn open(&mut self) {
    self.visible = true;
  }

  pub fn close(&mut self) {
    self.visible = false;
  }

  pub fn set_email(&mut self, email: impl Into<String>) {
    self.email = email.into();
  }

  /// Validate the entered address. Passing clears the error, closes the
  /// popup, and unlocks the gate; the caller then starts generation.
  pub fn submit(&mut self) -> bool {
    if self.email.is_empty() {
      self.error = Some("Email is required".to_string());
      return false;
    }
    if !is_valid_email(&self.email) {
      self.error = Some("Please enter a valid email".to_string());
      return false;
    }

    self.error = None;
    self.submitted = true;
    self.visible = false;
    true
  }
}

/// Form entries are free text; a field only counts once it parses to a
/// positive number.
pub(crate) fn parse_positive(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
