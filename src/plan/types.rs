//! Plan input type definitions: sex, activity, training timing, warnings.

use serde::{Deserialize, Serialize};

use crate::plan::meals::Meal;

/// Biological sex, used by the BMR formula and the fat allowance lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strength training experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl StrengthLevel {
    /// Estimated energy cost of one strength session in kcal.
    pub fn session_kcal(&self) -> f64 {
        match self {
            StrengthLevel::Beginner => 150.0,
            StrengthLevel::Intermediate => 200.0,
            StrengthLevel::Advanced => 250.0,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthLevel::Beginner => "Beginner",
            StrengthLevel::Intermediate => "Intermediate",
            StrengthLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Activity inputs for the expenditure model.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInputs {
    /// Strength training level; `None` when the user does no strength training
    pub strength: Option<StrengthLevel>,
    /// Average cardio energy expenditure in kcal/day (weekly cardio divided by 7)
    pub cardio_kcal_per_day: f64,
}

impl ActivityInputs {
    /// Whether the user trains with weights regularly.
    pub fn has_strength_training(&self) -> bool {
        self.strength.is_some()
    }

    /// Energy added by a strength session on a training day (0 without one).
    pub fn strength_kcal(&self) -> f64 {
        self.strength.map(|level| level.session_kcal()).unwrap_or(0.0)
    }
}

/// When the user trains relative to the day's meals.
///
/// Drives which meal receives the post-workout carbohydrate share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingTiming {
    /// Train after breakfast (early wake)
    AfterBreakfastEarly,
    /// Train after breakfast (late wake)
    AfterBreakfastLate,
    /// Train before lunch
    BeforeLunch,
    /// Train after lunch
    AfterLunch,
    /// Train before dinner
    BeforeDinner,
    /// Train after dinner
    AfterDinner,
    /// Train late at night
    LateNight,
    /// No training today
    #[default]
    RestDay,
}

impl TrainingTiming {
    /// Resolve which meal receives the post-workout carbohydrate share.
    ///
    /// Training around breakfast puts it on breakfast, around lunch on lunch,
    /// around dinner or late at night on dinner. Rest days fall back to lunch.
    pub fn post_workout_meal(&self) -> Meal {
        match self {
            TrainingTiming::AfterBreakfastEarly | TrainingTiming::AfterBreakfastLate => {
                Meal::Breakfast
            }
            TrainingTiming::BeforeLunch | TrainingTiming::AfterLunch => Meal::Lunch,
            TrainingTiming::BeforeDinner | TrainingTiming::AfterDinner => Meal::Dinner,
            TrainingTiming::LateNight => Meal::Dinner,
            TrainingTiming::RestDay => Meal::Lunch,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingTiming::AfterBreakfastEarly => "Train after breakfast (early wake)",
            TrainingTiming::AfterBreakfastLate => "Train after breakfast (late wake)",
            TrainingTiming::BeforeLunch => "Train before lunch",
            TrainingTiming::AfterLunch => "Train after lunch",
            TrainingTiming::BeforeDinner => "Train before dinner",
            TrainingTiming::AfterDinner => "Train after dinner",
            TrainingTiming::LateNight => "Train late night",
            TrainingTiming::RestDay => "Rest day",
        }
    }
}

impl std::fmt::Display for TrainingTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Non-fatal conditions surfaced alongside a computed plan.
///
/// None of these abort the calculation; each has a defined fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanWarning {
    /// Fixed fat plus suggested protein alone exceed the daily target;
    /// the carbohydrate residual was clamped to zero
    MacroBudgetExceeded { deficit_kcal: f64 },
    /// The supplied food catalog was rejected; default suggestions are in use
    CatalogDiscarded { reason: String },
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanWarning::MacroBudgetExceeded { deficit_kcal } => write!(
                f,
                "Fixed fat + suggested protein exceed the daily target by {deficit_kcal:.0} kcal; carbs clamped to 0"
            ),
            PlanWarning::CatalogDiscarded { reason } => {
                write!(f, "Food catalog discarded ({reason}); using default suggestions")
            }
        }
    }
}
