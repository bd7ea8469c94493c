//! Daily intake targets resolved from balance calories.

use serde::{Deserialize, Serialize};

use crate::energy::estimator::EnergyBalances;

/// Training goal driving the intake multiplier.
///
/// Only fat loss is supported; the multiplier lookup is the extension point
/// should other goals ever be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Eat below expenditure to lose fat
    #[default]
    FatLoss,
}

impl Goal {
    /// Intake multiplier applied to balance calories.
    pub fn multiplier(&self) -> f64 {
        match self {
            Goal::FatLoss => 0.64,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat Loss",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which day of the plan is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// A day with a strength session
    #[default]
    Training,
    /// A day without one
    Rest,
}

impl DayKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DayKind::Training => "Training day",
            DayKind::Rest => "Rest day",
        }
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Daily calorie intake targets per day scenario.
///
/// Both fields carry the same value when the user does no strength training.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Target intake on training days in kcal
    pub training_day_kcal: f64,
    /// Target intake on rest days in kcal
    pub rest_day_kcal: f64,
}

impl DailyTargets {
    /// Apply the goal multiplier to both balance figures.
    pub fn from_balances(balances: &EnergyBalances, goal: Goal) -> Self {
        Self {
            training_day_kcal: balances.training * goal.multiplier(),
            rest_day_kcal: balances.rest * goal.multiplier(),
        }
    }

    /// The target fed to the macro allocator for the chosen day.
    pub fn for_day(&self, day: DayKind) -> f64 {
        match day {
            DayKind::Training => self.training_day_kcal,
            DayKind::Rest => self.rest_day_kcal,
        }
    }
}
