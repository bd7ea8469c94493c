//! MacroPlan - Fat-Loss Calorie & Meal Planning Calculator
//!
//! A single-session nutrition calculator: estimates basal metabolic rate,
//! scales it to daily expenditure, applies the fat-loss intake multiplier,
//! splits the resulting target into fixed-fat/protein/residual-carb budgets,
//! apportions those budgets across four named meals and renders example
//! foods sized to each meal's budget.

pub mod config;
pub mod energy;
pub mod export;
pub mod foods;
pub mod plan;

// Re-export commonly used types
pub use config::{PlanRequest, UserProfile};
pub use energy::estimator::{EnergyBalances, EnergyFigures};
pub use energy::targets::{DailyTargets, DayKind, Goal};
pub use foods::catalog::FoodCatalog;
pub use plan::macros::MacroPlan;
pub use plan::MealPlan;
