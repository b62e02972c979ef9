//! Deterministic estimation layer for lift and energy metrics
//!
//! Pure closed-form calculators. The generation pipelines quote these
//! numbers in prompts; the model writes prose around them and never does
//! the math itself.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Constants
/// ---------------------------------------------------------------------------

/// Rep count assumed for the max-estimation test set (Epley-family formula).
const TEST_SET_REPS: f64 = 8.0;

/// Percentage of 1RM quoted as the working weight in workout prompts.
pub const WORKING_WEIGHT_PERCENT: u32 = 75;

/// ---------------------------------------------------------------------------
/// Lift Metrics
/// ---------------------------------------------------------------------------

/// Estimated one-rep max from an 8-rep test lift, rounded to whole kg.
/// Total over any weight; callers gate on the entry being present.
pub fn one_rep_max(weight_kg: f64) -> i64 {
  (weight_kg * (1.0 + TEST_SET_REPS / 30.0)).round() as i64
}

/// Load at a given percentage of 1RM, rounded to whole kg.
pub fn percentage_of(one_rm_kg: i64, percent: u32) -> i64 {
  (percent as f64 / 100.0 * one_rm_kg as f64).round() as i64
}

/// The load quoted as "working weight" alongside a 1RM.
pub fn working_weight(one_rm_kg: i64) -> i64 {
  percentage_of(one_rm_kg, WORKING_WEIGHT_PERCENT)
}

/// One row of the percentage loading table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingEntry {
  pub percent: u32,
  pub weight_kg: i64,
}

/// Loading table from 60% to 95% of 1RM, one row per whole percent.
pub fn loading_table(one_rm_kg: i64) -> Vec<LoadingEntry> {
  (60..=95)
    .map(|percent| LoadingEntry {
      percent,
      weight_kg: percentage_of(one_rm_kg, percent),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Biometrics
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
  Male,
  Female,
}

/// Activity multipliers for scaling BMR up to daily expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
  Sedentary,        // little or no exercise
  LightlyActive,    // 1-3 sessions per week
  ModeratelyActive, // 3-5 sessions per week
  VeryActive,       // 6-7 sessions per week
  ExtraActive,      // physical job or twice-daily training
}

impl ActivityLevel {
  pub const ALL: [ActivityLevel; 5] = [
    ActivityLevel::Sedentary,
    ActivityLevel::LightlyActive,
    ActivityLevel::ModeratelyActive,
    ActivityLevel::VeryActive,
    ActivityLevel::ExtraActive,
  ];

  pub fn factor(&self) -> f64 {
    match self {
      ActivityLevel::Sedentary => 1.2,
      ActivityLevel::LightlyActive => 1.375,
      ActivityLevel::ModeratelyActive => 1.55,
      ActivityLevel::VeryActive => 1.725,
      ActivityLevel::ExtraActive => 1.9,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ActivityLevel::Sedentary => "Sedentary",
      ActivityLevel::LightlyActive => "Lightly active",
      ActivityLevel::ModeratelyActive => "Moderately active",
      ActivityLevel::VeryActive => "Very active",
      ActivityLevel::ExtraActive => "Extra active",
    }
  }
}

/// Raw biometric form state. Numeric fields stay absent until the entry
/// parses to a positive value, so a half-filled form never computes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
  pub sex: Sex,
  pub age_years: Option<f64>,
  pub weight_kg: Option<f64>,
  pub height_cm: Option<f64>,
  pub activity: ActivityLevel,
}

impl Default for BiometricInput {
  fn default() -> Self {
    Self {
      sex: Sex::Male,
      age_years: None,
      weight_kg: None,
      height_cm: None,
      activity: ActivityLevel::Sedentary,
    }
  }
}

impl BiometricInput {
  /// Mifflin-St Jeor resting expenditure, rounded to the nearest kcal.
  /// None until weight, height, and age are all present and positive.
  pub fn bmr_kcal(&self) -> Option<i64> {
    match (self.weight_kg, self.height_cm, self.age_years) {
      (Some(w), Some(h), Some(a)) if w > 0.0 && h > 0.0 && a > 0.0 => {
        let base = 10.0 * w + 6.25 * h - 5.0 * a;
        let bmr = match self.sex {
          Sex::Male => base + 5.0,
          Sex::Female => base - 161.0,
        };
        Some(bmr.round() as i64)
      }
      _ => None,
    }
  }

  /// Daily expenditure at the selected activity level.
  pub fn tdee_kcal(&self) -> Option<i64> {
    self.bmr_kcal().map(|bmr| tdee(bmr, self.activity))
  }
}

/// Daily energy expenditure for a rounded BMR at one activity level.
pub fn tdee(bmr_kcal: i64, level: ActivityLevel) -> i64 {
  (bmr_kcal as f64 * level.factor()).round() as i64
}

/// ---------------------------------------------------------------------------
/// Derived Metrics
/// ---------------------------------------------------------------------------

/// Everything the calculators derive from current input. Each metric is
/// independently optional: lift numbers need a test weight, energy numbers a
/// complete biometric form. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedMetrics {
  pub one_rep_max_kg: Option<i64>,
  pub working_weight_kg: Option<i64>,
  pub bmr_kcal: Option<i64>,
  pub tdee_kcal: Option<i64>,
}

impl DerivedMetrics {
  pub fn compute(test_weight_kg: Option<f64>, biometrics: &BiometricInput) -> Self {
    let one_rm = test_weight_kg.filter(|w| *w > 0.0).map(one_rep_max);

    Self {
      one_rep_max_kg: one_rm,
      working_weight_kg: one_rm.map(working_weight),
      bmr_kcal: biometrics.bmr_kcal(),
      tdee_kcal: biometrics.tdee_kcal(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
