//! Typed plan shapes returned by the generation pipelines
//!
//! These structs are the contract side of the prompt templates: the template
//! text describes a JSON shape, and deserializing into these types is what
//! accepts or rejects a model reply. Fallback constructors carry the canned
//! copy shown when generation fails, in the same shapes.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Plan Requests
/// ---------------------------------------------------------------------------

/// The three things the coach can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanKind {
  Workout,
  MealPlan,
  NutritionTip,
}

impl PlanKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      PlanKind::Workout => "workout",
      PlanKind::MealPlan => "meal_plan",
      PlanKind::NutritionTip => "nutrition_tip",
    }
  }
}

/// What a workout prompt is built around. Both page flows exist: the lift
/// page programs around an estimated max, the calorie page around a daily
/// energy target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutTarget {
  OneRepMax { one_rm_kg: i64 },
  DailyCalories { target_kcal: i64 },
}

/// One user action's worth of generation input. Built fresh per action and
/// never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanRequest {
  Workout(WorkoutTarget),
  MealPlan { target_kcal: i64 },
  NutritionTip { target_kcal: i64 },
}

impl PlanRequest {
  pub fn kind(&self) -> PlanKind {
    match self {
      PlanRequest::Workout(_) => PlanKind::Workout,
      PlanRequest::MealPlan { .. } => PlanKind::MealPlan,
      PlanRequest::NutritionTip { .. } => PlanKind::NutritionTip,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Workout Plan
/// ---------------------------------------------------------------------------

/// One exercise line in the structured workout shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub name: String,
  pub sets: String,
  pub reps: String,
  pub rest: String,
  pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
  pub day: String,
  pub warmup: String,
  pub exercises: Vec<Exercise>,
}

/// The two shapes the workout template family has produced: structured
/// day/exercise lists, or a flat string using escaped-newline line breaks.
/// The wire carries no tag, so deserialization tries days first and falls
/// back to plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutContent {
  Days(Vec<WorkoutDay>),
  Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
  pub workout: WorkoutContent,
  pub motivation: String,

  /// Only present in the structured shape.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tips: Vec<String>,
}

/// A displayable day heading plus its exercise lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSection {
  pub day: String,
  pub exercises: Vec<String>,
}

impl WorkoutPlan {
  /// Day sections for display, handled once per content variant: structured
  /// days map directly, flat text is split per the template's line-break
  /// rules.
  pub fn sections(&self) -> Vec<WorkoutSection> {
    match &self.workout {
      WorkoutContent::Days(days) => days.iter().map(section_from_day).collect(),
      WorkoutContent::Text(text) => split_workout_text(text),
    }
  }

  /// Placeholder when no API key is configured. The lift page tells the
  /// user where the key goes; the calorie page keeps it shorter.
  pub fn missing_key_fallback(target: &WorkoutTarget) -> Self {
    let motivation = match target {
      WorkoutTarget::OneRepMax { .. } => "Please add your API key to the .env file! 💪",
      WorkoutTarget::DailyCalories { .. } => "Please configure your API key",
    };

    Self {
      workout: WorkoutContent::Text("Error: Gemini API key not found".to_string()),
      motivation: motivation.to_string(),
      tips: Vec::new(),
    }
  }

  /// Placeholder for any failed generation attempt.
  pub fn failure_fallback(target: &WorkoutTarget) -> Self {
    let (workout, motivation) = match target {
      WorkoutTarget::OneRepMax { .. } => (
        "Error generating workout. Please try again.",
        "Never give up! Even when technology fails, we keep pushing forward! 💪",
      ),
      WorkoutTarget::DailyCalories { .. } => (
        "Error generating workout plan. Please try again.",
        "Stay strong! Technical issues are temporary, but your dedication is permanent! 💪",
      ),
    };

    Self {
      workout: WorkoutContent::Text(workout.to_string()),
      motivation: motivation.to_string(),
      tips: Vec::new(),
    }
  }
}

fn section_from_day(day: &WorkoutDay) -> WorkoutSection {
  let mut exercises = Vec::with_capacity(day.exercises.len() + 1);
  if !day.warmup.is_empty() {
    exercises.push(format!("Warm-up: {}", day.warmup));
  }
  for exercise in &day.exercises {
    let mut line = format!("{}x{} {} (rest {})", exercise.sets, exercise.reps, exercise.name, exercise.rest);
    if !exercise.notes.is_empty() {
      line.push_str(&format!(" - {}", exercise.notes));
    }
    exercises.push(line);
  }

  WorkoutSection {
    day: day.day.clone(),
    exercises,
  }
}

/// Split flat workout text into day sections.
///
/// The templates ask for `\n` line breaks and models deliver either the
/// literal two-character escape or a real newline, so both are normalized
/// before splitting. Blank-line breaks separate days; the first line of a
/// section is its heading and `"- "` bullets are stripped from the rest.
fn split_workout_text(text: &str) -> Vec<WorkoutSection> {
  let normalized = text.replace("\\n", "\n");

  normalized
    .split("\n\n")
    .filter(|section| !section.trim().is_empty())
    .map(|section| {
      let mut lines = section.split('\n');
      let day = lines.next().unwrap_or("").trim().to_string();
      let exercises = lines
        .map(|line| line.trim().trim_start_matches("- ").to_string())
        .filter(|line| !line.is_empty())
        .collect();

      WorkoutSection { day, exercises }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Meal Plan
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
  pub meal: String,
  pub calories: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
  pub day: String,
  pub breakfast: MealItem,
  pub lunch: MealItem,
  pub dinner: MealItem,
  pub snacks: Vec<MealItem>,
}

/// The 5-day plan shape. The template demands exactly five weekPlan entries;
/// the count is a prompt rule, not a parse-time check, so a short reply
/// still displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
  pub meals: String,
  pub tips: String,
  pub week_plan: Vec<DayPlan>,
}

impl MealPlan {
  pub fn missing_key_fallback() -> Self {
    Self {
      meals: "Error: Gemini API key not found".to_string(),
      tips: "Please configure your API key".to_string(),
      week_plan: Vec::new(),
    }
  }

  pub fn failure_fallback() -> Self {
    Self {
      meals: "Error generating meal plan. Please try again.".to_string(),
      tips: "Don't give up! Technical issues happen, but your health journey continues! 💪".to_string(),
      week_plan: Vec::new(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Nutrition Tip
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTip {
  pub title: String,
  pub explanation: String,
  pub action_item: String,
}

impl NutritionTip {
  pub fn missing_key_fallback() -> Self {
    Self {
      title: "Error: Gemini API key not found".to_string(),
      explanation: "Nutrition tips need a configured API key before they can be generated.".to_string(),
      action_item: "Please configure your API key".to_string(),
    }
  }

  pub fn failure_fallback() -> Self {
    Self {
      title: "Error generating nutrition tip. Please try again.".to_string(),
      explanation: "Don't sweat it! One missing tip never stopped anyone's progress! 💪".to_string(),
      action_item: "Run the calculation again in a moment".to_string(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flat_workout_deserializes_as_text() {
    let json = r#"{"workout":"4x8 BENCH PRESS\n3x10 DIPS","motivation":"PUSH!"}"#;
    let plan: WorkoutPlan = serde_json::from_str(json).unwrap();

    assert_eq!(
      plan.workout,
      WorkoutContent::Text("4x8 BENCH PRESS\n3x10 DIPS".to_string())
    );
    assert_eq!(plan.motivation, "PUSH!");
    assert!(plan.tips.is_empty());
  }

  #[test]
  fn test_structured_workout_deserializes_as_days() {
    let json = r#"{
      "workout": [
        {
          "day": "Monday",
          "warmup": "5 min rowing",
          "exercises": [
            {"name": "Squats", "sets": "3", "reps": "12", "rest": "90 sec", "notes": "full depth"}
          ]
        }
      ],
      "motivation": "Show up.",
      "tips": ["Sleep 8 hours"]
    }"#;
    let plan: WorkoutPlan = serde_json::from_str(json).unwrap();

    match &plan.workout {
      WorkoutContent::Days(days) => {
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, "Monday");
        assert_eq!(days[0].exercises[0].name, "Squats");
      }
      WorkoutContent::Text(_) => panic!("expected structured days"),
    }
    assert_eq!(plan.tips, vec!["Sleep 8 hours"]);
  }

  #[test]
  fn test_sections_from_escaped_text() {
    // Models following the template rules emit literal \n sequences
    let plan = WorkoutPlan {
      workout: WorkoutContent::Text(
        r"MONDAY - FULL BODY:\n- 3x12 Squats\n- 3x10 Push-ups\n\nWEDNESDAY - CARDIO:\n- 30 min run".to_string(),
      ),
      motivation: "GO".to_string(),
      tips: Vec::new(),
    };

    let sections = plan.sections();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].day, "MONDAY - FULL BODY:");
    assert_eq!(sections[0].exercises, vec!["3x12 Squats", "3x10 Push-ups"]);
    assert_eq!(sections[1].day, "WEDNESDAY - CARDIO:");
    assert_eq!(sections[1].exercises, vec!["30 min run"]);
  }

  #[test]
  fn test_sections_from_real_newlines() {
    let plan = WorkoutPlan {
      workout: WorkoutContent::Text("MONDAY\n- 3x12 Squats\n\nFRIDAY\n- 4x8 Deadlifts".to_string()),
      motivation: "GO".to_string(),
      tips: Vec::new(),
    };

    let sections = plan.sections();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].exercises, vec!["3x12 Squats"]);
    assert_eq!(sections[1].day, "FRIDAY");
  }

  #[test]
  fn test_sections_from_structured_days() {
    let plan = WorkoutPlan {
      workout: WorkoutContent::Days(vec![WorkoutDay {
        day: "Tuesday".to_string(),
        warmup: "5 min jump rope".to_string(),
        exercises: vec![Exercise {
          name: "Bench Press".to_string(),
          sets: "4".to_string(),
          reps: "8".to_string(),
          rest: "2 min".to_string(),
          notes: String::new(),
        }],
      }]),
      motivation: "GO".to_string(),
      tips: Vec::new(),
    };

    let sections = plan.sections();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].day, "Tuesday");
    assert_eq!(sections[0].exercises[0], "Warm-up: 5 min jump rope");
    assert_eq!(sections[0].exercises[1], "4x8 Bench Press (rest 2 min)");
  }

  #[test]
  fn test_meal_plan_wire_names() {
    let json = r#"{
      "meals": "Your plan",
      "tips": "Hydrate",
      "weekPlan": [
        {
          "day": "Monday",
          "breakfast": {"meal": "Oatmeal with berries", "calories": 450},
          "lunch": {"meal": "Chicken salad", "calories": 550},
          "dinner": {"meal": "Salmon with quinoa", "calories": 600},
          "snacks": [{"meal": "Greek yogurt", "calories": 150}]
        }
      ]
    }"#;
    let plan: MealPlan = serde_json::from_str(json).unwrap();

    assert_eq!(plan.week_plan.len(), 1);
    assert_eq!(plan.week_plan[0].breakfast.calories, 450);
    assert_eq!(plan.week_plan[0].snacks[0].meal, "Greek yogurt");

    // week_plan serializes back under its wire name
    let out = serde_json::to_string(&plan).unwrap();
    assert!(out.contains("\"weekPlan\""));
  }

  #[test]
  fn test_nutrition_tip_wire_names() {
    let json = r#"{"title":"Protein Timing","explanation":"Spread it out.","actionItem":"Add protein to breakfast"}"#;
    let tip: NutritionTip = serde_json::from_str(json).unwrap();

    assert_eq!(tip.action_item, "Add protein to breakfast");
  }

  #[test]
  fn test_fallbacks_are_shape_compatible() {
    let lift = WorkoutPlan::missing_key_fallback(&WorkoutTarget::OneRepMax { one_rm_kg: 127 });
    assert_eq!(
      lift.workout,
      WorkoutContent::Text("Error: Gemini API key not found".to_string())
    );
    assert_eq!(lift.motivation, "Please add your API key to the .env file! 💪");

    let diet = WorkoutPlan::failure_fallback(&WorkoutTarget::DailyCalories { target_kcal: 1674 });
    assert_eq!(
      diet.workout,
      WorkoutContent::Text("Error generating workout plan. Please try again.".to_string())
    );

    let meals = MealPlan::missing_key_fallback();
    assert!(meals.week_plan.is_empty());

    // Flat fallback serializes like the flat shape: no tips field at all
    let out = serde_json::to_string(&lift).unwrap();
    assert!(!out.contains("tips"));
    assert!(serde_json::to_string(&MealPlan::failure_fallback()).unwrap().contains("\"weekPlan\":[]"));
  }

  #[test]
  fn test_plan_request_kind() {
    let lift = PlanRequest::Workout(WorkoutTarget::OneRepMax { one_rm_kg: 127 });
    assert_eq!(lift.kind(), PlanKind::Workout);
    assert_eq!(PlanRequest::MealPlan { target_kcal: 1674 }.kind(), PlanKind::MealPlan);
    assert_eq!(PlanKind::NutritionTip.as_str(), "nutrition_tip");
  }
}
