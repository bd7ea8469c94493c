//! Basal metabolic rate and daily energy expenditure estimation.

use serde::{Deserialize, Serialize};

use crate::config::UserProfile;
use crate::plan::types::{ActivityInputs, Sex};

/// Activity factor implied by a sedentary day: total expenditure = BMR / 0.7.
pub const NO_ACTIVITY_FACTOR: f64 = 0.7;

/// Estimate basal metabolic rate with the Mifflin-St Jeor equation.
///
/// `9.99*kg + 6.25*cm - 4.92*years`, plus 5 for men and minus 161 for women,
/// so two otherwise identical profiles differ by exactly 166 kcal by sex.
/// Defined for any positive inputs; range checks live in the config layer.
pub fn bmr_mifflin_st_jeor(profile: &UserProfile) -> f64 {
    let base =
        9.99 * profile.weight_kg + 6.25 * profile.height_cm - 4.92 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Baseline energy figures derived from the user profile alone.
///
/// Recomputed from scratch for every plan; never cached across profile edits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyFigures {
    /// Basal metabolic rate in kcal
    pub bmr: f64,
    /// Estimated total daily expenditure with no exercise at all
    pub no_activity_total: f64,
}

impl EnergyFigures {
    /// Compute both baseline figures from a profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let bmr = bmr_mifflin_st_jeor(profile);
        Self {
            bmr,
            no_activity_total: bmr / NO_ACTIVITY_FACTOR,
        }
    }
}

/// Balance calories per day scenario, before the goal multiplier is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyBalances {
    /// Training day: no-activity total + strength session + cardio
    pub training: f64,
    /// Rest day: no-activity total + cardio
    pub rest: f64,
}

impl EnergyBalances {
    /// Compute both day scenarios from the baseline figures and activity.
    ///
    /// Without strength training the session cost is zero and the two
    /// balances coincide; there is no separate rest-day formula.
    pub fn compute(figures: &EnergyFigures, activity: &ActivityInputs) -> Self {
        let rest = figures.no_activity_total + activity.cardio_kcal_per_day;
        Self {
            training: rest + activity.strength_kcal(),
            rest,
        }
    }
}
