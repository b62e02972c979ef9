//! Calorie page state: biometrics entry, BMR/TDEE, generated plans

use serde::Serialize;

use crate::coach::Coach;
use crate::estimator::{ActivityLevel, BiometricInput, Sex};
use crate::plan::{MealPlan, NutritionTip, WorkoutPlan, WorkoutTarget};

use super::{parse_positive, EmailGate};

/// Calorie calculator page. Numeric entries stay raw form text; calculating
/// derives BMR/TDEE and kicks off the two calorie pipelines, and the workout
/// plan waits behind the email gate.
#[derive(Debug, Clone, Serialize)]
pub struct CalorieView {
  pub sex: Sex,
  pub age: String,
  pub weight: String,
  pub height: String,
  pub activity: ActivityLevel,

  /// Set by calculate(); stays until the next calculation.
  pub bmr: Option<i64>,
  pub tdee: Option<i64>,

  pub meal_plan: Option<MealPlan>,
  pub nutrition_tip: Option<NutritionTip>,
  pub workout_plan: Option<WorkoutPlan>,

  pub email_gate: EmailGate,
  pub loading: bool,
}

impl Default for CalorieView {
  fn default() -> Self {
    Self {
      sex: Sex::Male,
      age: String::new(),
      weight: String::new(),
      height: String::new(),
      activity: ActivityLevel::Sedentary,
      bmr: None,
      tdee: None,
      meal_plan: None,
      nutrition_tip: None,
      workout_plan: None,
      email_gate: EmailGate::default(),
      loading: false,
    }
  }
}

impl CalorieView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_sex(&mut self, sex: Sex) {
    self.sex = sex;
  }

  pub fn set_age(&mut self, raw: impl Into<String>) {
    self.age = raw.into();
  }

  pub fn set_weight(&mut self, raw: impl Into<String>) {
    self.weight = raw.into();
  }

  pub fn set_height(&mut self, raw: impl Into<String>) {
    self.height = raw.into();
  }

  pub fn set_activity(&mut self, level: ActivityLevel) {
    self.activity = level;
  }

  /// Current form parsed into estimator input. Fields that do not parse
  /// stay absent so derived metrics short-circuit instead of computing
  /// from zeros.
  pub fn biometrics(&self) -> BiometricInput {
    BiometricInput {
      sex: self.sex,
      age_years: parse_positive(&self.age),
      weight_kg: parse_positive(&self.weight),
      height_cm: parse_positive(&self.height),
      activity: self.activity,
    }
  }

  /// The Calculate action: derive BMR/TDEE and, when they resolve, run the
  /// meal-plan and nutrition-tip pipelines concurrently. An incomplete form
  /// derives nothing and makes no calls.
  pub async fn calculate(&mut self, coach: &Coach) {
    let input = self.biometrics();
    self.bmr = input.bmr_kcal();
    self.tdee = input.tdee_kcal();

    let bmr = match self.bmr {
      Some(v) => v,
      None => return,
    };

    self.loading = true;
    let (meal_plan, nutrition_tip) = coach.calorie_plans(bmr).await;
    self.meal_plan = Some(meal_plan);
    self.nutrition_tip = Some(nutrition_tip);
    self.loading = false;
  }

  /// Submit the email gate and, once it unlocks, fetch the workout plan.
  pub async fn submit_email(&mut self, coach: &Coach) {
    if !self.email_gate.submit() {
      return;
    }
    self.generate_workout(coach).await;
  }

  /// One workout generation against the computed BMR target. Does nothing
  /// until a calculation has produced one.
  pub async fn generate_workout(&mut self, coach: &Coach) {
    let target_kcal = match self.bmr {
      Some(v) => v,
      None => return,
    };

    self.loading = true;
    let plan = coach.workout_plan(WorkoutTarget::DailyCalories { target_kcal }).await;
    self.workout_plan = Some(plan);
    self.loading = false;
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
