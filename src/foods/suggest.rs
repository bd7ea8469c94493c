//! Food suggestions sized to per-meal carbohydrate and protein budgets.
//!
//! With a catalog, items are sampled at random through the caller-supplied
//! RNG; the portion and kcal numbers themselves are deterministic. Without
//! one, fixed default foods are used for every meal.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::foods::catalog::{FoodCatalog, FoodCategory, FoodItem};
use crate::plan::meals::{Meal, MealSlot};

/// Items sampled per macro per meal when a catalog is available.
pub const SAMPLES_PER_MACRO: usize = 2;

/// A built-in fallback food.
#[derive(Debug, Clone, Copy)]
pub struct DefaultFood {
    /// Food name
    pub name: &'static str,
    /// Energy density in kcal per 100 g
    pub cal_per_100g: f64,
    /// Protein per 100 g where relevant
    pub protein_g_per_100g: Option<f64>,
}

/// Default carbohydrate sources used when no catalog is supplied.
pub const DEFAULT_CARBS: [DefaultFood; 4] = [
    DefaultFood {
        name: "Cooked white rice",
        cal_per_100g: 130.0,
        protein_g_per_100g: None,
    },
    DefaultFood {
        name: "Cooked sweet potato",
        cal_per_100g: 90.0,
        protein_g_per_100g: None,
    },
    DefaultFood {
        name: "Oats (dry)",
        cal_per_100g: 389.0,
        protein_g_per_100g: None,
    },
    DefaultFood {
        name: "Bread (slice)",
        cal_per_100g: 250.0,
        protein_g_per_100g: None,
    },
];

/// Default protein sources used when no catalog is supplied.
pub const DEFAULT_PROTEINS: [DefaultFood; 4] = [
    DefaultFood {
        name: "Chicken breast (cooked)",
        cal_per_100g: 165.0,
        protein_g_per_100g: Some(31.0),
    },
    DefaultFood {
        name: "Egg (whole)",
        cal_per_100g: 155.0,
        protein_g_per_100g: Some(13.0),
    },
    DefaultFood {
        name: "Greek yogurt",
        cal_per_100g: 59.0,
        protein_g_per_100g: Some(10.0),
    },
    DefaultFood {
        name: "Tofu (firm)",
        cal_per_100g: 76.0,
        protein_g_per_100g: Some(8.0),
    },
];

/// A single food suggestion sized to a kcal budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Food name
    pub food: String,
    /// Portion in grams (budget / energy density, truncated)
    pub grams: u32,
    /// Calories the portion actually supplies, rounded
    pub kcal: u32,
}

impl Suggestion {
    /// Size a portion of a food to a kcal budget.
    pub fn for_budget(food: &str, cal_per_100g: f64, target_kcal: f64) -> Self {
        let grams = if cal_per_100g > 0.0 {
            (target_kcal / cal_per_100g * 100.0) as u32
        } else {
            0
        };
        let kcal = (cal_per_100g * f64::from(grams) / 100.0).round() as u32;

        Self {
            food: food.to_string(),
            grams,
            kcal,
        }
    }

    /// "name(Ng)" label used in exports.
    pub fn label(&self) -> String {
        format!("{}({}g)", self.food, self.grams)
    }
}

/// Per-meal suggestion record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSuggestions {
    /// Which meal these suggestions are for
    pub meal: Meal,
    /// Carbohydrate budget for the meal in kcal
    pub carb_kcal: f64,
    /// Protein budget for the meal in kcal
    pub protein_kcal: f64,
    /// Carbohydrate suggestions (may be empty if nothing matched)
    pub carbs: Vec<Suggestion>,
    /// Protein suggestions (may be empty if nothing matched)
    pub proteins: Vec<Suggestion>,
    /// Day-level fat guidance, identical across meals
    pub fat_note: String,
}

/// Sample up to `n` random items from a catalog category.
pub fn sample_foods<'a, R: Rng + ?Sized>(
    catalog: &'a FoodCatalog,
    category: FoodCategory,
    n: usize,
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    let pool = catalog.items_in_category(category);
    pool.choose_multiple(rng, n).copied().collect()
}

/// The fixed day-level fat note.
pub fn fat_note(fat_grams: f64) -> String {
    format!(
        "Include {} g fat across day (e.g. egg yolk, cooking oil, nuts).",
        fat_grams as u32
    )
}

/// Build suggestions for one meal slot.
///
/// With a catalog, up to two random carb items and two random protein items;
/// without one, the first default food of each kind. Empty categories leave
/// that macro's list empty rather than failing.
pub fn suggest_for_meal<R: Rng + ?Sized>(
    slot: &MealSlot,
    fat_grams: f64,
    catalog: Option<&FoodCatalog>,
    rng: &mut R,
) -> MealSuggestions {
    let (carbs, proteins) = match catalog {
        Some(catalog) => {
            let carbs = sample_foods(catalog, FoodCategory::Carb, SAMPLES_PER_MACRO, rng)
                .into_iter()
                .map(|item| Suggestion::for_budget(&item.food, item.cal_per_100g, slot.carb_kcal))
                .collect();
            let proteins = sample_foods(catalog, FoodCategory::Protein, SAMPLES_PER_MACRO, rng)
                .into_iter()
                .map(|item| {
                    Suggestion::for_budget(&item.food, item.cal_per_100g, slot.protein_kcal)
                })
                .collect();
            (carbs, proteins)
        }
        None => {
            let carb = &DEFAULT_CARBS[0];
            let protein = &DEFAULT_PROTEINS[0];
            (
                vec![Suggestion::for_budget(
                    carb.name,
                    carb.cal_per_100g,
                    slot.carb_kcal,
                )],
                vec![Suggestion::for_budget(
                    protein.name,
                    protein.cal_per_100g,
                    slot.protein_kcal,
                )],
            )
        }
    };

    MealSuggestions {
        meal: slot.meal,
        carb_kcal: slot.carb_kcal,
        protein_kcal: slot.protein_kcal,
        carbs,
        proteins,
        fat_note: fat_note(fat_grams),
    }
}
