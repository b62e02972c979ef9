//! Plan generation pipelines
//!
//! One pipeline per plan kind: compose the prompt, make a single generation
//! call, extract the typed payload, and resolve to either the generated plan
//! or its canned fallback. Failures never leave this module; causes go to
//! the log and callers always receive a displayable plan.

use tracing::warn;

use crate::error::PlanError;
use crate::extract;
use crate::gemini::GeminiClient;
use crate::plan::{MealPlan, NutritionTip, PlanRequest, WorkoutPlan, WorkoutTarget};
use crate::prompts;

/// ---------------------------------------------------------------------------
/// Coach
/// ---------------------------------------------------------------------------

/// Front door for plan generation. Holds a client when a credential is
/// configured; without one, every pipeline resolves straight to its
/// missing-key fallback and the network is never touched.
pub struct Coach {
  client: Option<GeminiClient>,
}

impl Coach {
  /// Build from the process environment, loading `.env` first if present.
  /// A missing key is not an error here; it surfaces per request as the
  /// designated fallback plan.
  pub fn from_env() -> Self {
    dotenvy::dotenv().ok();

    Self {
      client: GeminiClient::from_env().ok(),
    }
  }

  pub fn new(client: Option<GeminiClient>) -> Self {
    Self { client }
  }

  /// Workout plan for either page flow. Resolves to a plan or its fallback,
  /// never an error.
  pub async fn workout_plan(&self, target: WorkoutTarget) -> WorkoutPlan {
    let request = PlanRequest::Workout(target);

    match self.run::<WorkoutPlan>(&request).await {
      Ok(plan) => plan,
      Err(PlanError::MissingCredential) => {
        warn!(kind = request.kind().as_str(), "workout generation skipped: no API key configured");
        WorkoutPlan::missing_key_fallback(&target)
      }
      Err(e) => {
        warn!(kind = request.kind().as_str(), error = %e, "workout generation failed");
        WorkoutPlan::failure_fallback(&target)
      }
    }
  }

  /// 5-day meal plan for a calorie target.
  pub async fn meal_plan(&self, target_kcal: i64) -> MealPlan {
    let request = PlanRequest::MealPlan { target_kcal };

    match self.run::<MealPlan>(&request).await {
      Ok(plan) => plan,
      Err(PlanError::MissingCredential) => {
        warn!(kind = request.kind().as_str(), "meal plan generation skipped: no API key configured");
        MealPlan::missing_key_fallback()
      }
      Err(e) => {
        warn!(kind = request.kind().as_str(), error = %e, "meal plan generation failed");
        MealPlan::failure_fallback()
      }
    }
  }

  /// Single nutrition tip for a calorie target.
  pub async fn nutrition_tip(&self, target_kcal: i64) -> NutritionTip {
    let request = PlanRequest::NutritionTip { target_kcal };

    match self.run::<NutritionTip>(&request).await {
      Ok(tip) => tip,
      Err(PlanError::MissingCredential) => {
        warn!(kind = request.kind().as_str(), "nutrition tip generation skipped: no API key configured");
        NutritionTip::missing_key_fallback()
      }
      Err(e) => {
        warn!(kind = request.kind().as_str(), error = %e, "nutrition tip generation failed");
        NutritionTip::failure_fallback()
      }
    }
  }

  /// Meal plan and nutrition tip for one calorie target, issued
  /// concurrently. The calls are independent: one failing resolves to its
  /// own fallback and never delays or cancels the other.
  pub async fn calorie_plans(&self, target_kcal: i64) -> (MealPlan, NutritionTip) {
    tokio::join!(self.meal_plan(target_kcal), self.nutrition_tip(target_kcal))
  }

  /// Shared pipeline body: credential check, compose, one call, extract.
  async fn run<T: serde::de::DeserializeOwned>(&self, request: &PlanRequest) -> Result<T, PlanError> {
    let client = self.client.as_ref().ok_or(PlanError::MissingCredential)?;
    let prompt = prompts::compose(request);
    let raw = client.generate(&prompt).await?;

    extract::extract_plan(&raw)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
