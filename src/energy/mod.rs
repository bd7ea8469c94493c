//! Energy estimation: BMR, daily expenditure and intake targets.

pub mod estimator;
pub mod targets;

pub use estimator::{EnergyBalances, EnergyFigures};
pub use targets::{DailyTargets, DayKind, Goal};
