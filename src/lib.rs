//! Fitness calculator core
//!
//! Closed-form lift and energy estimation plus an AI plan-generation flow:
//! compose a templated prompt, make one generation call, carve the JSON
//! payload out of the free-form reply, and type-check it into a plan. Any
//! failure resolves to a canned fallback plan, so callers always have
//! something to display. The two page surfaces are modeled as explicit
//! view-state structs; rendering is out of scope.

pub mod coach;
pub mod error;
pub mod estimator;
pub mod extract;
pub mod gemini;
pub mod plan;
pub mod prompts;
pub mod views;

pub use coach::Coach;
pub use error::PlanError;
pub use estimator::{ActivityLevel, BiometricInput, DerivedMetrics, Sex};
pub use plan::{MealPlan, NutritionTip, PlanKind, PlanRequest, WorkoutPlan, WorkoutTarget};
pub use views::{CalorieView, LiftView};
