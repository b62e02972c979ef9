//! Lift page state: 1RM estimate, loading table, gated recommendation

use serde::Serialize;

use crate::coach::Coach;
use crate::estimator::{self, LoadingEntry};
use crate::plan::{WorkoutPlan, WorkoutTarget};

use super::{parse_positive, EmailGate};

/// One-rep-max calculator page. Derived numbers are methods, recomputed from
/// the raw entry on every call; only generation results are stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LiftView {
  /// Raw form entry; empty until the user types.
  pub weight: String,
  pub show_percentages: bool,
  pub email_gate: EmailGate,
  pub recommendation: Option<WorkoutPlan>,
  pub loading: bool,
}

impl LiftView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_weight(&mut self, raw: impl Into<String>) {
    self.weight = raw.into();
  }

  pub fn toggle_percentages(&mut self) {
    self.show_percentages = !self.show_percentages;
  }

  /// Parsed test weight; None until the entry is a positive number.
  pub fn weight_kg(&self) -> Option<f64> {
    parse_positive(&self.weight)
  }

  /// Estimated 1RM for the current entry.
  pub fn one_rep_max(&self) -> Option<i64> {
    self.weight_kg().map(estimator::one_rep_max)
  }

  /// 60-95% loading table for the current estimate.
  pub fn loading_table(&self) -> Option<Vec<LoadingEntry>> {
    self.one_rep_max().map(estimator::loading_table)
  }

  /// Submit the email gate and, once it unlocks, fetch the recommendation.
  pub async fn submit_email(&mut self, coach: &Coach) {
    if !self.email_gate.submit() {
      return;
    }
    self.generate_recommendation(coach).await;
  }

  /// One generation call for the current estimate. Resolves to a plan or
  /// its fallback; with no valid weight entered it does nothing.
  pub async fn generate_recommendation(&mut self, coach: &Coach) {
    let one_rm_kg = match self.one_rep_max() {
      Some(v) => v,
      None => return,
    };

    self.loading = true;
    let plan = coach.workout_plan(WorkoutTarget::OneRepMax { one_rm_kg }).await;
    self.recommendation = Some(plan);
    self.loading = false;
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_derived_numbers_follow_entry() {
    let mut view = LiftView::new();
    assert_eq!(view.one_rep_max(), None);

    view.set_weight("100");
    assert_eq!(view.one_rep_max(), Some(127));
    assert_eq!(view.loading_table().map(|t| t.len()), Some(36));

    // Junk entries drop the derived numbers instead of computing from zero
    view.set_weight("a hundred");
    assert_eq!(view.one_rep_max(), None);
    assert_eq!(view.loading_table(), None);
  }

  #[test]
  fn test_toggle_percentages() {
    let mut view = LiftView::new();
    assert!(!view.show_percentages);

    view.toggle_percentages();
    assert!(view.show_percentages);
    view.toggle_percentages();
    assert!(!view.show_percentages);
  }

  #[tokio::test]
  async fn test_gate_blocks_generation() {
    let mut view = LiftView::new();
    view.set_weight("100");
    view.email_gate.set_email("nope");

    view.submit_email(&Coach::new(None)).await;

    assert!(view.recommendation.is_none());
    assert!(!view.email_gate.submitted);
  }

  #[tokio::test]
  async fn test_unlocked_gate_publishes_plan() {
    let mut view = LiftView::new();
    view.set_weight("100");
    view.email_gate.set_email("lifter@example.com");

    // No credential configured: the missing-key fallback is published
    view.submit_email(&Coach::new(None)).await;

    assert!(view.email_gate.submitted);
    let plan = view.recommendation.as_ref().unwrap();
    assert_eq!(
      *plan,
      WorkoutPlan::missing_key_fallback(&WorkoutTarget::OneRepMax { one_rm_kg: 127 })
    );
    assert!(!view.loading);
  }

  #[tokio::test]
  async fn test_generation_needs_a_weight() {
    let mut view = LiftView::new();

    view.generate_recommendation(&Coach::new(None)).await;

    assert!(view.recommendation.is_none());
  }
}
