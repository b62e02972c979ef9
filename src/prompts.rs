//! Prompt templates for the generation pipelines
//!
//! Each template is a contract string: its wording fixes the JSON shape the
//! extractor expects back, so edits here are breaking changes to plan
//! parsing. The template text is the only schema the generation API ever
//! sees.

use crate::estimator;
use crate::plan::{PlanRequest, WorkoutTarget};

/// Elite-coach persona for the lift page workout (flat text shape).
const STRENGTH_WORKOUT_TEMPLATE: &str = include_str!("prompts/strength_workout.txt");

/// Full-body program complementing a daily calorie target.
const CALORIE_WORKOUT_TEMPLATE: &str = include_str!("prompts/calorie_workout.txt");

const MEAL_PLAN_TEMPLATE: &str = include_str!("prompts/meal_plan.txt");

const NUTRITION_TIP_TEMPLATE: &str = include_str!("prompts/nutrition_tip.txt");

/// Marker substituted with the calorie target in the calorie-driven templates.
const CALORIES_MARKER: &str = "{calories}";

/// Complete instruction string for one plan request.
pub fn compose(request: &PlanRequest) -> String {
  match request {
    PlanRequest::Workout(WorkoutTarget::OneRepMax { one_rm_kg }) => strength_workout_prompt(*one_rm_kg),
    PlanRequest::Workout(WorkoutTarget::DailyCalories { target_kcal }) => {
      calorie_workout_prompt(*target_kcal)
    }
    PlanRequest::MealPlan { target_kcal } => meal_plan_prompt(*target_kcal),
    PlanRequest::NutritionTip { target_kcal } => nutrition_tip_prompt(*target_kcal),
  }
}

/// Persona block plus a tail naming the 1RM and its 75% working weight.
pub fn strength_workout_prompt(one_rm_kg: i64) -> String {
  let working_weight_kg = estimator::working_weight(one_rm_kg);

  format!(
    "{}\n\nCreate a workout for someone with a 1RM of {}kg (working weight: {}kg). Focus on compound movements and progressive overload.",
    STRENGTH_WORKOUT_TEMPLATE.trim_end(),
    one_rm_kg,
    working_weight_kg
  )
}

pub fn calorie_workout_prompt(target_kcal: i64) -> String {
  substitute_calories(CALORIE_WORKOUT_TEMPLATE, target_kcal)
}

pub fn meal_plan_prompt(target_kcal: i64) -> String {
  substitute_calories(MEAL_PLAN_TEMPLATE, target_kcal)
}

pub fn nutrition_tip_prompt(target_kcal: i64) -> String {
  substitute_calories(NUTRITION_TIP_TEMPLATE, target_kcal)
}

fn substitute_calories(template: &str, target_kcal: i64) -> String {
  template.trim_end().replace(CALORIES_MARKER, &target_kcal.to_string())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
