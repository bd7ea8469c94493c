//! Plan assembly: the full calculation pipeline in dependency order.

pub mod macros;
pub mod meals;
pub mod types;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::UserProfile;
use crate::energy::estimator::{EnergyBalances, EnergyFigures};
use crate::energy::targets::{DailyTargets, DayKind, Goal};
use crate::foods::catalog::FoodCatalog;
use crate::foods::suggest::{self, MealSuggestions};

pub use macros::{fat_allowance_grams, percent_of_target, MacroPlan};
pub use meals::{apportion, Meal, MealSlot};
pub use types::{ActivityInputs, PlanWarning, Sex, StrengthLevel, TrainingTiming};

/// A complete computed meal plan.
///
/// Carries every intermediate figure so display and export layers never
/// recompute anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Day scenario the plan was generated for
    pub day: DayKind,
    /// Training timing used for post-workout resolution
    pub timing: TrainingTiming,
    /// BMR and no-activity expenditure
    pub energy: EnergyFigures,
    /// Balance calories per day scenario
    pub balances: EnergyBalances,
    /// Daily intake targets per day scenario
    pub targets: DailyTargets,
    /// The target actually fed to the macro allocator
    pub daily_target_kcal: f64,
    /// Daily macro budgets
    pub macros: MacroPlan,
    /// Per-meal apportionment in fixed order
    pub meals: Vec<MealSlot>,
    /// Per-meal food suggestions
    pub suggestions: Vec<MealSuggestions>,
    /// Non-fatal conditions encountered during calculation
    pub warnings: Vec<PlanWarning>,
}

impl MealPlan {
    /// Run the full pipeline for one request.
    ///
    /// Pure except for the food sampling driven by `rng`; all numeric
    /// results are deterministic for identical inputs.
    pub fn generate<R: Rng + ?Sized>(
        profile: &UserProfile,
        activity: &ActivityInputs,
        timing: TrainingTiming,
        day: DayKind,
        catalog: Option<&FoodCatalog>,
        rng: &mut R,
    ) -> Self {
        let mut warnings = Vec::new();

        let energy = EnergyFigures::from_profile(profile);
        let balances = EnergyBalances::compute(&energy, activity);
        let targets = DailyTargets::from_balances(&balances, Goal::FatLoss);
        let daily_target_kcal = targets.for_day(day);

        let macros = MacroPlan::allocate(daily_target_kcal, profile.sex, profile.weight_kg);
        if macros.budget_exceeded {
            let deficit_kcal = macros.fat_kcal + macros.protein_kcal - daily_target_kcal;
            tracing::warn!(deficit_kcal, "macro budget exceeded, carbs clamped to zero");
            warnings.push(PlanWarning::MacroBudgetExceeded { deficit_kcal });
        }

        let meals = meals::apportion(daily_target_kcal, &macros, timing);
        let suggestions = meals
            .iter()
            .map(|slot| suggest::suggest_for_meal(slot, macros.fat_grams, catalog, rng))
            .collect();

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            day,
            timing,
            energy,
            balances,
            targets,
            daily_target_kcal,
            macros,
            meals,
            suggestions,
            warnings,
        }
    }
}
