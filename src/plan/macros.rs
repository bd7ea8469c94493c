//! Daily macronutrient allocation: fixed fat, weight-based protein,
//! residual carbohydrates.

use serde::{Deserialize, Serialize};

use crate::plan::types::Sex;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Protein allowance in grams per kg of body weight.
///
/// 1.6-2.0 g/kg is the accepted range; 1.8 is the only value computed.
pub const PROTEIN_G_PER_KG: f64 = 1.8;

/// Body weight at and above which men get the larger fat allowance.
pub const HEAVY_WEIGHT_KG: f64 = 120.0;

/// Fixed daily fat allowance in grams.
///
/// Men at or above 120 kg get 70 g, lighter men 60 g, women 50 g regardless
/// of weight. Independent of the calorie target.
pub fn fat_allowance_grams(sex: Sex, weight_kg: f64) -> f64 {
    match sex {
        Sex::Male if weight_kg >= HEAVY_WEIGHT_KG => 70.0,
        Sex::Male => 60.0,
        Sex::Female => 50.0,
    }
}

/// Share of the daily target supplied by a kcal figure, as a percentage.
pub fn percent_of_target(kcal: f64, daily_target_kcal: f64) -> f64 {
    if daily_target_kcal == 0.0 {
        0.0
    } else {
        kcal / daily_target_kcal * 100.0
    }
}

/// Daily macro budgets for a single calorie target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPlan {
    /// Fixed fat allowance in grams
    pub fat_grams: f64,
    /// Fat budget in kcal
    pub fat_kcal: f64,
    /// Protein at 1.8 g/kg in grams
    pub protein_grams: f64,
    /// Protein budget in kcal
    pub protein_kcal: f64,
    /// Residual carbohydrates in grams, never negative
    pub carb_grams: f64,
    /// Residual carbohydrate budget in kcal, never negative
    pub carb_kcal: f64,
    /// Set when fat + protein alone exceeded the daily target
    pub budget_exceeded: bool,
}

impl MacroPlan {
    /// Split a daily calorie target into fat, protein and residual carbs.
    ///
    /// Fat and protein are fixed by sex and weight; whatever is left of the
    /// target goes to carbohydrates. A negative residual is clamped to zero
    /// and flagged via `budget_exceeded`.
    pub fn allocate(daily_target_kcal: f64, sex: Sex, weight_kg: f64) -> Self {
        let fat_grams = fat_allowance_grams(sex, weight_kg);
        let fat_kcal = fat_grams * KCAL_PER_G_FAT;

        let protein_grams = PROTEIN_G_PER_KG * weight_kg;
        let protein_kcal = protein_grams * KCAL_PER_G_PROTEIN;

        let remaining_kcal = daily_target_kcal - fat_kcal - protein_kcal;
        let budget_exceeded = remaining_kcal < 0.0;
        let carb_kcal = remaining_kcal.max(0.0);

        Self {
            fat_grams,
            fat_kcal,
            protein_grams,
            protein_kcal,
            carb_grams: carb_kcal / KCAL_PER_G_CARB,
            carb_kcal,
            budget_exceeded,
        }
    }
}
